use std::{fs, path::PathBuf};

use serde::Deserialize;
use shared::domain::RunMethod;
use tracing::warn;

pub const SETTINGS_FILE: &str = "launcher.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
    pub run_method: RunMethod,
    pub request_timeout_secs: Option<u64>,
    pub programs_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5000".into(),
            run_method: RunMethod::Post,
            request_timeout_secs: None,
            programs_dir: PathBuf::from("codigos"),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    server_url: Option<String>,
    run_method: Option<RunMethod>,
    request_timeout_secs: Option<u64>,
    programs_dir: Option<PathBuf>,
}

/// Defaults, then `launcher.toml` in the working directory, then environment.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        apply_file(&mut settings, &raw);
    }
    apply_env(&mut settings, |key| std::env::var(key).ok());

    settings
}

pub fn apply_file(settings: &mut Settings, raw: &str) {
    let file_cfg = match toml::from_str::<FileSettings>(raw) {
        Ok(file_cfg) => file_cfg,
        Err(err) => {
            warn!(error = %err, file = SETTINGS_FILE, "ignoring unreadable settings file");
            return;
        }
    };

    if let Some(v) = file_cfg.server_url {
        settings.server_url = v;
    }
    if let Some(v) = file_cfg.run_method {
        settings.run_method = v;
    }
    if let Some(v) = file_cfg.request_timeout_secs {
        settings.request_timeout_secs = Some(v);
    }
    if let Some(v) = file_cfg.programs_dir {
        settings.programs_dir = v;
    }
}

pub fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("APP__SERVER_URL") {
        settings.server_url = v;
    }

    if let Some(v) = lookup("APP__RUN_METHOD") {
        match v.parse() {
            Ok(method) => settings.run_method = method,
            Err(err) => warn!(error = %err, "ignoring APP__RUN_METHOD"),
        }
    }

    if let Some(v) = lookup("APP__REQUEST_TIMEOUT_SECS") {
        match v.parse::<u64>() {
            Ok(parsed) => settings.request_timeout_secs = Some(parsed),
            Err(err) => warn!(error = %err, value = %v, "ignoring APP__REQUEST_TIMEOUT_SECS"),
        }
    }

    if let Some(v) = lookup("APP__PROGRAMS_DIR") {
        settings.programs_dir = PathBuf::from(v);
    }
}
