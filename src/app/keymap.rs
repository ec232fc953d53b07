use super::action::Action;
use super::state::AppMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    // Normal mode bindings; dialogs decode their own keys in `input`.
    pub normal: HashMap<KeyEvent, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut normal = HashMap::new();

        // --- Navigation ---
        normal.insert(key(KeyCode::Char('j')), Action::SelectNext);
        normal.insert(key(KeyCode::Down), Action::SelectNext);
        normal.insert(key(KeyCode::Char('k')), Action::SelectPrev);
        normal.insert(key(KeyCode::Up), Action::SelectPrev);
        normal.insert(key(KeyCode::Char('g')), Action::SelectFirst);
        normal.insert(key(KeyCode::Home), Action::SelectFirst);
        normal.insert(key(KeyCode::Char('G')), Action::SelectLast);
        normal.insert(key(KeyCode::End), Action::SelectLast);

        // --- Buttons ---
        normal.insert(key(KeyCode::Enter), Action::ExecuteButton(None));
        normal.insert(key(KeyCode::Char('a')), Action::AddButtonIntent);
        normal.insert(key(KeyCode::Char('e')), Action::EditButtonIntent(None));
        normal.insert(key(KeyCode::Char('d')), Action::DeleteButtonIntent(None));
        normal.insert(key(KeyCode::Delete), Action::DeleteButtonIntent(None));
        normal.insert(key(KeyCode::Char('r')), Action::Refresh);

        // --- UI ---
        normal.insert(key(KeyCode::Char('q')), Action::Quit);
        normal.insert(key(KeyCode::Char(':')), Action::EnterCommandMode);
        normal.insert(key(KeyCode::Char('?')), Action::ToggleHelp);
        normal.insert(key(KeyCode::Char('T')), Action::EnterThemeSelection);
        normal.insert(key(KeyCode::Esc), Action::CancelMode);

        Self { normal }
    }
}

impl KeyMap {
    pub fn get_action(&self, event: KeyEvent, mode: AppMode) -> Option<Action> {
        if mode != AppMode::Normal {
            return None;
        }
        // Terminals report shifted characters inconsistently
        let event = if let KeyCode::Char(_) = event.code {
            KeyEvent::new(event.code, event.modifiers - KeyModifiers::SHIFT)
        } else {
            event
        };
        self.normal.get(&event).cloned()
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}
