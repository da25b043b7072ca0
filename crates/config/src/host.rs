use serde::{Deserialize, Serialize};

use crate::Settings;

/// Colours the host asks the view to use, as hex strings (`#rrggbb`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemeParams {
    #[serde(default)]
    pub bg_color: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
}

/// Launch information forwarded by the host. Logged at startup only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LaunchParams {
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub start_param: Option<String>,
}

/// Read-only context handed to the API client and the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostContext {
    pub init_data_raw: String,
    pub theme: ThemeParams,
    pub launch: LaunchParams,
}

impl From<&Settings> for HostContext {
    fn from(settings: &Settings) -> Self {
        Self {
            init_data_raw: settings.init_data.clone(),
            theme: settings.theme.clone(),
            launch: settings.launch.clone(),
        }
    }
}
