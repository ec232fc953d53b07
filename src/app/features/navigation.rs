use crate::app::{
    action::{Action, UpdateResult},
    state::AppState,
};
use crate::domain::models::ButtonRecord;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::SelectNext => move_selection(state, 1),
        Action::SelectPrev => move_selection(state, -1),
        Action::SelectFirst => {
            if !state.buttons.is_empty() {
                state.list_state.select(Some(0));
            }
        }
        Action::SelectLast => {
            if let Some(last) = state.buttons.len().checked_sub(1) {
                state.list_state.select(Some(last));
            }
        }
        _ => return UpdateResult::NotHandled,
    }
    UpdateResult::Handled(None)
}

fn move_selection(state: &mut AppState, delta: isize) {
    let len = state.buttons.len();
    if len == 0 {
        state.list_state.select(None);
        return;
    }
    let new_index = calculate_new_index(state.list_state.selected(), delta, len);
    state.list_state.select(Some(new_index));
}

fn calculate_new_index(current: Option<usize>, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    match current {
        Some(i) => (i as isize + delta).rem_euclid(len as isize) as usize,
        None => 0,
    }
}

/// Installs a fresh list, keeping the selection on the same button when it
/// survived, otherwise on the nearest row.
pub fn replace_buttons(state: &mut AppState, buttons: Vec<ButtonRecord>) {
    let previous_id = state.selected_button().map(|b| b.id.clone());
    let previous_idx = state.list_state.selected();
    state.buttons = buttons;

    let selected = if state.buttons.is_empty() {
        None
    } else if let Some(idx) = previous_id
        .and_then(|id| state.buttons.iter().position(|b| b.id == id))
    {
        Some(idx)
    } else {
        Some(previous_idx.unwrap_or(0).min(state.buttons.len() - 1))
    };
    state.list_state.select(selected);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ButtonId;

    fn buttons(ids: &[&str]) -> Vec<ButtonRecord> {
        ids.iter()
            .map(|id| ButtonRecord {
                id: ButtonId::from(*id),
                label: id.to_uppercase(),
                command: format!("echo {id}"),
                emoji: "🚀".to_string(),
                color: "charts.blue".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_calculate_new_index_wraps() {
        assert_eq!(calculate_new_index(Some(2), 1, 3), 0);
        assert_eq!(calculate_new_index(Some(0), -1, 3), 2);
        assert_eq!(calculate_new_index(None, 1, 3), 0);
        assert_eq!(calculate_new_index(Some(1), 1, 0), 0);
    }

    #[test]
    fn test_selection_follows_button_across_reload() {
        let mut state = AppState::default();
        replace_buttons(&mut state, buttons(&["a", "b", "c"]));
        state.list_state.select(Some(2));

        replace_buttons(&mut state, buttons(&["c", "a"]));
        assert_eq!(state.list_state.selected(), Some(0));
    }

    #[test]
    fn test_selection_clamps_when_button_removed() {
        let mut state = AppState::default();
        replace_buttons(&mut state, buttons(&["a", "b", "c"]));
        state.list_state.select(Some(2));

        replace_buttons(&mut state, buttons(&["a", "b"]));
        assert_eq!(state.list_state.selected(), Some(1));

        replace_buttons(&mut state, Vec::new());
        assert_eq!(state.list_state.selected(), None);
    }

    #[test]
    fn test_navigation_on_empty_list() {
        let mut state = AppState::default();
        update(&mut state, &Action::SelectNext);
        update(&mut state, &Action::SelectLast);
        assert_eq!(state.list_state.selected(), None);
    }
}
