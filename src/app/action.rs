use crate::app::command::Command;
use crate::domain::models::{ButtonId, ButtonRecord};

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Navigation ---
    SelectNext,
    SelectPrev,
    SelectFirst,
    SelectLast,

    // --- Button Intents ---
    AddButtonIntent,                    // Start the label/command prompts
    EditButtonIntent(Option<ButtonId>), // Prompts pre-filled from the button
    DeleteButtonIntent(Option<ButtonId>), // Ask for confirmation
    ExecuteButton(Option<ButtonId>),    // Send the command to the terminal
    ExecuteButtonAt(usize),             // One-click run of a row
    Refresh,                            // Re-read the list from the store

    // --- Dialogs ---
    SubmitPrompt(String), // Enter in a prompt, raw text
    ConfirmAccept,
    ConfirmReject,

    // --- UI Mode Transitions ---
    EnterCommandMode,                              // Open command palette (:)
    CancelMode,                                    // ESC key (close modal/mode)
    DismissError,                                  // Acknowledge the error modal
    ToggleHelp,                                    // Toggle the help overlay (?)
    EnterThemeSelection,                           // Open theme selection modal (T)
    SelectThemeNext,                               // Next theme in selection
    SelectThemePrev,                               // Previous theme in selection
    TextAreaInput(crossterm::event::KeyEvent),     // Handle text area input
    OpenContextMenu(Option<ButtonId>, (u16, u16)), // Open menu at position
    SelectContextMenuAction(usize),                // Select action by index
    SelectContextMenuNext,                         // Next item in menu
    SelectContextMenuPrev,                         // Prev item in menu
    CloseContextMenu,                              // Close the menu
    CommandPaletteNext,                            // Next item in palette
    CommandPalettePrev,                            // Prev item in palette
    CommandPaletteSelect,                          // Execute selected command

    // --- Async Results ---
    ButtonsChanged,                       // Store change notification
    ButtonsLoaded(Vec<ButtonRecord>),     // Fresh copy of the list
    ButtonsFileChanged,                   // Backing file created/modified on disk
    ButtonsFileRemoved,                   // Backing file deleted on disk
    OperationCompleted(Result<String, String>), // Success/Failure message
    Warning(String),                      // Non-fatal problem (e.g. a failed save)
}
