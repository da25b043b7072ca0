use std::path::PathBuf;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use tgcloud_models::InputMode;
use tracing::debug;

use super::App;

impl App {
    /// Handles a key once no alert or help overlay is in the way.
    ///
    /// # Errors
    ///
    /// This function currently does not return any errors, but returns a `Result`
    /// for consistency with the event loop.
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.ui.input_mode {
            InputMode::Normal => self.handle_normal_mode(key).await,
            InputMode::Editing => self.handle_upload_prompt(key).await,
        }
        Ok(())
    }

    async fn handle_normal_mode(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::F(1) | KeyCode::Char('?') => self.ui.show_help = true,
            KeyCode::Up | KeyCode::Char('k') => self.move_folder_cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_folder_cursor_down(),
            KeyCode::Home => self.folder_cursor_first(),
            KeyCode::End => self.folder_cursor_last(),
            KeyCode::PageUp => self.scroll_files_up(),
            KeyCode::PageDown => self.scroll_files_down(),
            KeyCode::Enter => self.activate_entry().await,
            KeyCode::Char('r') => self.refresh().await,
            KeyCode::Char('u') => {
                self.ui.input_mode = InputMode::Editing;
                self.ui.input_buffer.clear();
            }
            _ => {}
        }
    }

    async fn handle_upload_prompt(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.close_upload_prompt(),
            KeyCode::Enter => {
                let input = std::mem::take(&mut self.ui.input_buffer);
                self.close_upload_prompt();

                let input = input.trim();
                if input.is_empty() {
                    debug!("Empty upload path, nothing to do");
                } else {
                    self.upload_path(&PathBuf::from(input)).await;
                }
            }
            KeyCode::Backspace => {
                self.ui.input_buffer.pop();
            }
            KeyCode::Char(c) => self.ui.input_buffer.push(c),
            _ => {}
        }
    }

    fn close_upload_prompt(&mut self) {
        self.ui.input_mode = InputMode::Normal;
        self.ui.input_buffer.clear();
    }
}
