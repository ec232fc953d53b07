use super::input::AppTextArea;
use crate::domain::models::ButtonId;

#[derive(Debug, Clone, PartialEq)]
pub enum PromptPurpose {
    Add,
    Edit(ButtonId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStep {
    Label,
    Command,
}

/// Two-step label/command prompt shared by the add and edit flows.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptState<'a> {
    pub purpose: PromptPurpose,
    pub step: PromptStep,
    /// Label accepted in the first step.
    pub label: Option<String>,
    /// Pre-fill for the command step when editing.
    pub initial_command: String,
    pub text_area: AppTextArea<'a>,
    pub validation: Option<String>,
}

impl PromptState<'_> {
    #[must_use]
    pub fn add() -> Self {
        Self {
            purpose: PromptPurpose::Add,
            step: PromptStep::Label,
            label: None,
            initial_command: String::new(),
            text_area: AppTextArea::default(),
            validation: None,
        }
    }

    #[must_use]
    pub fn edit(id: ButtonId, label: &str, command: &str) -> Self {
        Self {
            purpose: PromptPurpose::Edit(id),
            step: PromptStep::Label,
            label: None,
            initial_command: command.to_string(),
            text_area: AppTextArea::with_text(label),
            validation: None,
        }
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self.purpose {
            PromptPurpose::Add => " ADD SCRIPT BUTTON ",
            PromptPurpose::Edit(_) => " EDIT SCRIPT BUTTON ",
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &'static str {
        match self.step {
            PromptStep::Label => "Enter a label for the button",
            PromptStep::Command => "Enter the command to execute",
        }
    }

    #[must_use]
    pub fn placeholder(&self) -> &'static str {
        match self.step {
            PromptStep::Label => "e.g., Build Project",
            PromptStep::Command => "e.g., npm run build",
        }
    }

    /// Trimmed value, or the message shown for an empty one.
    pub fn validate(&self, raw: &str) -> Result<String, &'static str> {
        let value = raw.trim();
        if !value.is_empty() {
            return Ok(value.to_string());
        }
        Err(match self.step {
            PromptStep::Label => "Label cannot be empty",
            PromptStep::Command => "Command cannot be empty",
        })
    }

    /// Moves from the label step to the command step.
    pub fn advance(&mut self, label: String) {
        self.label = Some(label);
        self.step = PromptStep::Command;
        self.text_area = AppTextArea::with_text(&self.initial_command);
        self.validation = None;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmState {
    pub id: ButtonId,
    pub label: String,
}

impl ConfirmState {
    #[must_use]
    pub fn question(&self) -> String {
        format!("Are you sure you want to delete \"{}\"?", self.label)
    }
}
