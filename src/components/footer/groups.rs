use super::{FooterGroup, FooterItem};
use crate::app::state::{AppMode, AppState};

fn item(key: &'static str, desc: &'static str) -> FooterItem {
    FooterItem {
        key,
        desc,
        highlighted: false,
    }
}

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    if state.last_error.is_some() {
        return vec![FooterGroup {
            name: "ERROR",
            items: vec![item("Esc", "dismiss")],
        }];
    }

    match state.mode {
        AppMode::Normal => {
            let empty = state.buttons.is_empty();
            vec![
                FooterGroup {
                    name: "NAV",
                    items: vec![item("j/k", "move"), item("click", "run")],
                },
                FooterGroup {
                    name: "BUTTON",
                    items: vec![
                        item("Enter", "run"),
                        FooterItem {
                            key: "a",
                            desc: "add",
                            highlighted: empty,
                        },
                        item("e", "edit"),
                        item("d", "delete"),
                        item("m", "menu"),
                        item("r", "refresh"),
                    ],
                },
                FooterGroup {
                    name: "APP",
                    items: vec![
                        item(":", "cmds"),
                        item("T", "theme"),
                        item("?", "help"),
                        item("q", "quit"),
                    ],
                },
            ]
        }
        AppMode::Prompt => vec![FooterGroup {
            name: "PROMPT",
            items: vec![item("Enter", "accept"), item("Esc", "cancel")],
        }],
        AppMode::Confirm => vec![FooterGroup {
            name: "CONFIRM",
            items: vec![
                FooterItem {
                    key: "y",
                    desc: "delete",
                    highlighted: true,
                },
                item("n/Esc", "keep"),
            ],
        }],
        AppMode::ContextMenu | AppMode::ThemeSelection => vec![FooterGroup {
            name: "MENU",
            items: vec![
                item("j/k", "move"),
                item("Enter", "select"),
                item("Esc", "close"),
            ],
        }],
        AppMode::CommandPalette => vec![FooterGroup {
            name: "PALETTE",
            items: vec![
                item("type", "search"),
                item("\u{2191}\u{2193}", "move"),
                item("Enter", "run"),
                item("Esc", "close"),
            ],
        }],
        AppMode::Help => vec![FooterGroup {
            name: "HELP",
            items: vec![item("Esc/?", "close")],
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_highlighted_on_empty_list() {
        let state = AppState::default();
        let groups = get_groups(&state);
        let add = groups
            .iter()
            .flat_map(|g| &g.items)
            .find(|i| i.key == "a")
            .unwrap();
        assert!(add.highlighted);
    }

    #[test]
    fn test_error_overrides_mode() {
        let mut state = AppState::default();
        state.mode = AppMode::Prompt;
        state.set_error("Failed to update button", crate::app::state::ErrorSeverity::Error);
        let groups = get_groups(&state);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "ERROR");
    }
}
