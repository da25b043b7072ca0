mod actions;
mod handlers;
mod navigation;
mod state;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use state::App;

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;

impl App {
    /// Routes a key press to whichever layer currently owns input.
    ///
    /// # Errors
    /// Returns an error if a key handler fails. Backend failures are not
    /// errors here; they are logged or surfaced as alerts.
    pub async fn on_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.ui.alert.is_some() {
            self.dismiss_alert();
            return Ok(());
        }
        if self.ui.show_help {
            self.ui.show_help = false;
            return Ok(());
        }

        self.handle_key(key).await
    }
}
