use super::App;

const FILE_PAGE: usize = 10;

impl App {
    fn folder_entry_count(&self) -> usize {
        self.view.folders.len() + 2
    }

    pub fn move_folder_cursor_up(&mut self) {
        self.ui.folder_cursor = self.ui.folder_cursor.saturating_sub(1);
    }

    pub fn move_folder_cursor_down(&mut self) {
        let last = self.folder_entry_count() - 1;
        if self.ui.folder_cursor < last {
            self.ui.folder_cursor += 1;
        }
    }

    pub fn folder_cursor_first(&mut self) {
        self.ui.folder_cursor = 0;
    }

    pub fn folder_cursor_last(&mut self) {
        self.ui.folder_cursor = self.folder_entry_count() - 1;
    }

    /// Keeps the cursor on an existing entry after the folder list changed.
    pub fn clamp_folder_cursor(&mut self) {
        self.ui.folder_cursor = self.ui.folder_cursor.min(self.folder_entry_count() - 1);
    }

    pub fn scroll_files_up(&mut self) {
        self.ui.file_scroll = self.ui.file_scroll.saturating_sub(FILE_PAGE);
    }

    pub fn scroll_files_down(&mut self) {
        let max_scroll = self.view.files.len().saturating_sub(1);
        self.ui.file_scroll = (self.ui.file_scroll + FILE_PAGE).min(max_scroll);
    }
}
