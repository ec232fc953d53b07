use crate::domain::models::ButtonId;
use crate::theme::PaletteType;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddButton { label: String, command: String },
    UpdateButton { id: ButtonId, label: String, command: String },
    DeleteButton { id: ButtonId, label: String },
    ExecuteButton(ButtonId),
    RefreshButtons,
    ReloadButtons,
    ClearButtons,
    SaveTheme(PaletteType),
}
