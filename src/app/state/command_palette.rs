use crate::app::command_palette::search_commands;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommandPaletteState {
    pub query: String,
    pub matches: Vec<usize>, // Indices into the command list
    pub selected_index: usize,
}

impl CommandPaletteState {
    #[must_use]
    pub fn open() -> Self {
        Self {
            matches: search_commands(""),
            ..Default::default()
        }
    }

    pub fn push(&mut self, c: char) {
        self.query.push(c);
        self.refresh();
    }

    pub fn pop(&mut self) {
        self.query.pop();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.matches = search_commands(&self.query);
        self.selected_index = 0;
    }
}
