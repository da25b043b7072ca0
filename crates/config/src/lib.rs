mod host;
mod settings;

pub use host::{HostContext, LaunchParams, ThemeParams};
pub use settings::{API_URL_ENV, INIT_DATA_ENV, Settings};
