#[must_use]
pub fn get_suggestions(msg: &str) -> Vec<String> {
    let mut suggestions = Vec::new();
    let msg_lower = msg.to_lowercase();

    if msg_lower.contains("no workspace folder") {
        suggestions.push("Start scriptbuttons from your project directory".to_string());
        suggestions.push("Or pass the workspace: scriptbuttons <WORKSPACE_DIR>".to_string());
    }

    if msg_lower.contains("permission denied") {
        suggestions.push("Check the permissions of the .vscode directory".to_string());
    }

    if msg_lower.contains("failed to parse") || msg_lower.contains("failed to load") {
        suggestions.push(
            "Fix the JSON in the buttons file; it is rewritten on the next change".to_string(),
        );
    }

    if msg_lower.contains("tmux")
        && (msg_lower.contains("no server") || msg_lower.contains("not found"))
    {
        suggestions.push("Start tmux, or set runner = \"foreground\" in config.toml".to_string());
    }

    suggestions
}
