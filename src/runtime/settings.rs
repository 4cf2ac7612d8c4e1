use crate::config;

pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => s,
        Err(e) => {
            // Config is optional; failures should not prevent the app from starting.
            tracing::warn!(error = %e, "failed to load config, using defaults");
            config::Settings::default()
        }
    }
}
