use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppMode, AppState, ConfirmState, PromptPurpose, PromptState, PromptStep},
};

use super::navigation::replace_buttons;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        // --- Intents ---
        Action::AddButtonIntent => {
            state.prompt = Some(PromptState::add());
            state.mode = AppMode::Prompt;
            UpdateResult::Handled(None)
        }
        Action::EditButtonIntent(id) => {
            if let Some(button) = state.target_button(id.as_ref()) {
                state.prompt = Some(PromptState::edit(
                    button.id.clone(),
                    &button.label,
                    &button.command,
                ));
                state.mode = AppMode::Prompt;
            }
            UpdateResult::Handled(None)
        }
        Action::DeleteButtonIntent(id) => {
            if let Some(button) = state.target_button(id.as_ref()) {
                state.confirm = Some(ConfirmState {
                    id: button.id.clone(),
                    label: button.label.clone(),
                });
                state.mode = AppMode::Confirm;
            }
            UpdateResult::Handled(None)
        }
        Action::ExecuteButton(id) => {
            let command = state
                .target_button(id.as_ref())
                .map(|button| Command::ExecuteButton(button.id.clone()));
            UpdateResult::Handled(command)
        }
        Action::ExecuteButtonAt(idx) => {
            let Some(button) = state.buttons.get(*idx) else {
                return UpdateResult::Handled(None);
            };
            let id = button.id.clone();
            state.list_state.select(Some(*idx));
            UpdateResult::Handled(Some(Command::ExecuteButton(id)))
        }
        Action::Refresh => UpdateResult::Handled(Some(Command::RefreshButtons)),

        // --- Dialogs ---
        Action::SubmitPrompt(raw) => UpdateResult::Handled(submit_prompt(state, raw)),
        Action::ConfirmAccept => {
            let command = state.confirm.take().map(|confirm| Command::DeleteButton {
                id: confirm.id,
                label: confirm.label,
            });
            state.mode = AppMode::Normal;
            UpdateResult::Handled(command)
        }
        Action::ConfirmReject => {
            state.confirm = None;
            state.mode = AppMode::Normal;
            UpdateResult::Handled(None)
        }

        // --- Store / Watcher ---
        Action::ButtonsChanged => UpdateResult::Handled(Some(Command::RefreshButtons)),
        Action::ButtonsLoaded(buttons) => {
            replace_buttons(state, buttons.clone());
            UpdateResult::Handled(None)
        }
        Action::ButtonsFileChanged => UpdateResult::Handled(Some(Command::ReloadButtons)),
        Action::ButtonsFileRemoved => UpdateResult::Handled(Some(Command::ClearButtons)),
        _ => UpdateResult::NotHandled,
    }
}

fn submit_prompt(state: &mut AppState, raw: &str) -> Option<Command> {
    let prompt = state.prompt.as_mut()?;
    let value = match prompt.validate(raw) {
        Ok(value) => value,
        Err(message) => {
            prompt.validation = Some(message.to_string());
            return None;
        }
    };

    if prompt.step == PromptStep::Label {
        prompt.advance(value);
        return None;
    }

    let prompt = state.prompt.take()?;
    state.mode = AppMode::Normal;
    let label = prompt.label?;
    Some(match prompt.purpose {
        PromptPurpose::Add => Command::AddButton {
            label,
            command: value,
        },
        PromptPurpose::Edit(id) => Command::UpdateButton {
            id,
            label,
            command: value,
        },
    })
}
