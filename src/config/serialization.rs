//! Config serialization to TOML
//!
//! Single source of truth for the config file format. `config --reset` and
//! first-run template creation both write this output.

use super::Config;

impl Config {
    /// Serialize the full config as a commented TOML document
    pub fn to_toml(&self) -> String {
        format!(
            r#"# smart-connect configuration
# Environment variables override these values:
#   SMART_CONNECT_API_URL, SMART_CONNECT_TIMEOUT, SMART_CONNECT_THEME, SMART_CONNECT_USER

# Base URL of the CRM backend
api_url = "{api_url}"

# Whole-request and connect timeouts (seconds)
request_timeout_secs = {request_timeout}
connect_timeout_secs = {connect_timeout}

# Theme: dark, light, nord
theme = "{theme}"

# Username pre-filled on the login screen
username = "{username}"

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# JSON file logging (in addition to the in-app log panel)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            api_url = escape(&self.api_url),
            request_timeout = self.request_timeout_secs,
            connect_timeout = self.connect_timeout_secs,
            theme = escape(&self.theme),
            username = escape(&self.username),
            log_level = escape(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = escape(&self.logging.file_dir.display().to_string()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = escape(&self.logging.file_prefix),
        )
    }
}

/// Escape a value for a TOML basic string
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
