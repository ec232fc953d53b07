use super::action::Action;

#[derive(Debug, Clone)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub action: Action,
}

#[must_use]
pub fn get_commands() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition {
            name: "Run",
            description: "Run the selected button in the terminal",
            action: Action::ExecuteButton(None),
        },
        CommandDefinition {
            name: "Add Button",
            description: "Create a new script button",
            action: Action::AddButtonIntent,
        },
        CommandDefinition {
            name: "Edit Button",
            description: "Change the label or command of the selected button",
            action: Action::EditButtonIntent(None),
        },
        CommandDefinition {
            name: "Delete Button",
            description: "Remove the selected button",
            action: Action::DeleteButtonIntent(None),
        },
        CommandDefinition {
            name: "Refresh",
            description: "Re-read the button list",
            action: Action::Refresh,
        },
        CommandDefinition {
            name: "Theme",
            description: "Choose a color theme",
            action: Action::EnterThemeSelection,
        },
        CommandDefinition {
            name: "Help",
            description: "Show the help overlay",
            action: Action::ToggleHelp,
        },
        CommandDefinition {
            name: "Quit",
            description: "Quit Script Buttons",
            action: Action::Quit,
        },
    ]
}

#[must_use]
pub fn search_commands(query: &str) -> Vec<usize> {
    let commands = get_commands();
    if query.is_empty() {
        return (0..commands.len()).collect();
    }

    let query_lower = query.to_lowercase();
    let mut results: Vec<usize> = commands
        .iter()
        .enumerate()
        .filter(|(_, cmd)| cmd.name.to_lowercase().contains(&query_lower))
        .map(|(i, _)| i)
        .collect();

    // Description matches rank after name matches
    for (i, cmd) in commands.iter().enumerate() {
        if !results.contains(&i) && cmd.description.to_lowercase().contains(&query_lower) {
            results.push(i);
        }
    }

    results
}
