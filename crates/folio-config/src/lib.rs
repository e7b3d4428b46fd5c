use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const ENV_FOLIO_CONFIG: &str = "FOLIO_CONFIG";

const DEFAULT_CONTACT_ENDPOINT: &str = "https://formspree.io/f/mdkgaaej";
const DEFAULT_CHAT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_CHAT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_AVATAR: &str = "assets/profile/avatar.png";
const DEFAULT_GALLERY: &[&str] = &[
    "assets/profile/1.png",
    "assets/profile/2.png",
    "assets/profile/3.png",
];
const DEFAULT_RESUME_PDF: &str = "assets/resume.pdf";
const DEFAULT_PLACEHOLDER: &str = "assets/profile/placeholder.png";
const DEFAULT_STATUS_RESET_SECS: u64 = 5;
const DEFAULT_TRANSCRIPT_LINE_LIMIT: usize = 200;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    Message(String),
}

impl ConfigError {
    fn configuration(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FolioConfig {
    #[serde(default)]
    pub contact: ContactConfigToml,
    #[serde(default)]
    pub chat: ChatConfigToml,
    #[serde(default)]
    pub assets: AssetsConfigToml,
    #[serde(default)]
    pub ui: UiConfigToml,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactConfigToml {
    #[serde(default = "default_contact_endpoint")]
    pub endpoint: String,
}

impl Default for ContactConfigToml {
    fn default() -> Self {
        Self {
            endpoint: default_contact_endpoint(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatConfigToml {
    #[serde(default = "default_chat_model")]
    pub model: String,
    #[serde(default = "default_chat_api_base_url")]
    pub api_base_url: String,
}

impl Default for ChatConfigToml {
    fn default() -> Self {
        Self {
            model: default_chat_model(),
            api_base_url: default_chat_api_base_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetsConfigToml {
    #[serde(default = "default_avatar")]
    pub avatar: String,
    #[serde(default = "default_gallery")]
    pub gallery: Vec<String>,
    #[serde(default = "default_resume_pdf")]
    pub resume_pdf: String,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for AssetsConfigToml {
    fn default() -> Self {
        Self {
            avatar: default_avatar(),
            gallery: default_gallery(),
            resume_pdf: default_resume_pdf(),
            placeholder: default_placeholder(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiConfigToml {
    #[serde(default = "default_status_reset_secs")]
    pub status_reset_secs: u64,
    #[serde(default = "default_transcript_line_limit")]
    pub transcript_line_limit: usize,
}

impl Default for UiConfigToml {
    fn default() -> Self {
        Self {
            status_reset_secs: default_status_reset_secs(),
            transcript_line_limit: default_transcript_line_limit(),
        }
    }
}

pub fn load_from_env() -> Result<FolioConfig, ConfigError> {
    let path = config_path_from_env()?;
    load_from_path(path)
}

pub fn load_from_path(path: impl AsRef<Path>) -> Result<FolioConfig, ConfigError> {
    load_or_create_config(path.as_ref())
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let home = resolve_home_dir().ok_or_else(|| {
        ConfigError::configuration("Unable to resolve home directory from HOME or USERPROFILE")
    })?;

    Ok(home.join(".config").join("folio").join("config.toml"))
}

/// Log file destination for the running application, next to the rest of
/// the user-local data.
pub fn default_log_path() -> Result<PathBuf, ConfigError> {
    Ok(resolve_data_local_dir()?.join("folio").join("folio.log"))
}

fn config_path_from_env() -> Result<PathBuf, ConfigError> {
    match std::env::var(ENV_FOLIO_CONFIG) {
        Ok(raw) => {
            if raw.trim().is_empty() {
                default_config_path()
            } else {
                Ok(raw.into())
            }
        }
        Err(std::env::VarError::NotPresent) => default_config_path(),
        Err(_) => Err(ConfigError::configuration(
            "FOLIO_CONFIG contained invalid UTF-8",
        )),
    }
}

fn resolve_data_local_dir() -> Result<PathBuf, ConfigError> {
    if let Ok(path) = std::env::var("XDG_DATA_HOME") {
        let path = path.trim();
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    let home = resolve_home_dir().ok_or_else(|| {
        ConfigError::configuration("Unable to resolve home directory from HOME or USERPROFILE")
    })?;
    Ok(home.join(".local").join("share"))
}

fn resolve_home_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("USERPROFILE")
                .ok()
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        })
}

fn load_or_create_config(path: &Path) -> Result<FolioConfig, ConfigError> {
    if !path.exists() {
        write_config(path, &FolioConfig::default())?;
    }

    let raw = std::fs::read_to_string(path).map_err(|error| {
        ConfigError::configuration(format!(
            "failed to read config file '{}': {error}",
            path.display()
        ))
    })?;

    let mut config: FolioConfig = toml::from_str(raw.as_str()).map_err(|error| {
        ConfigError::configuration(format!(
            "failed to parse config file '{}': {error}",
            path.display()
        ))
    })?;

    if normalize_config(&mut config) {
        write_config(path, &config)?;
    }

    Ok(config)
}

fn write_config(path: &Path, config: &FolioConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|error| {
                ConfigError::configuration(format!(
                    "failed to create config directory '{}': {error}",
                    parent.display()
                ))
            })?;
        }
    }

    let serialized = toml::to_string_pretty(config).map_err(|error| {
        ConfigError::configuration(format!("failed to serialize config: {error}"))
    })?;

    std::fs::write(path, serialized).map_err(|error| {
        ConfigError::configuration(format!(
            "failed to write config file '{}': {error}",
            path.display()
        ))
    })
}

fn normalize_config(config: &mut FolioConfig) -> bool {
    let mut changed = false;

    changed |= normalize_non_empty_string(&mut config.contact.endpoint, default_contact_endpoint());
    changed |= normalize_non_empty_string(&mut config.chat.model, default_chat_model());
    changed |=
        normalize_non_empty_string(&mut config.chat.api_base_url, default_chat_api_base_url());
    changed |= normalize_non_empty_string(&mut config.assets.avatar, default_avatar());
    changed |= normalize_non_empty_string(&mut config.assets.resume_pdf, default_resume_pdf());
    changed |= normalize_non_empty_string(&mut config.assets.placeholder, default_placeholder());

    changed |= normalize_string_vec(&mut config.assets.gallery);
    if config.assets.gallery.is_empty() {
        config.assets.gallery = default_gallery();
        changed = true;
    }

    let clamped_reset = config.ui.status_reset_secs.clamp(1, 60);
    if clamped_reset != config.ui.status_reset_secs {
        config.ui.status_reset_secs = clamped_reset;
        changed = true;
    }

    let clamped_limit = config.ui.transcript_line_limit.clamp(20, 2000);
    if clamped_limit != config.ui.transcript_line_limit {
        config.ui.transcript_line_limit = clamped_limit;
        changed = true;
    }

    changed
}

fn normalize_non_empty_string(value: &mut String, default: String) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        if *value != default {
            *value = default;
            return true;
        }
        return false;
    }

    if trimmed != value {
        *value = trimmed.to_owned();
        return true;
    }
    false
}

fn normalize_string_vec(values: &mut Vec<String>) -> bool {
    let normalized = values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned)
        .collect::<Vec<_>>();
    if *values != normalized {
        *values = normalized;
        return true;
    }
    false
}

fn default_contact_endpoint() -> String {
    DEFAULT_CONTACT_ENDPOINT.to_owned()
}

fn default_chat_model() -> String {
    DEFAULT_CHAT_MODEL.to_owned()
}

fn default_chat_api_base_url() -> String {
    DEFAULT_CHAT_API_BASE_URL.to_owned()
}

fn default_avatar() -> String {
    DEFAULT_AVATAR.to_owned()
}

fn default_gallery() -> Vec<String> {
    DEFAULT_GALLERY.iter().map(|value| (*value).to_owned()).collect()
}

fn default_resume_pdf() -> String {
    DEFAULT_RESUME_PDF.to_owned()
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_owned()
}

fn default_status_reset_secs() -> u64 {
    DEFAULT_STATUS_RESET_SECS
}

fn default_transcript_line_limit() -> usize {
    DEFAULT_TRANSCRIPT_LINE_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn env_lock() -> &'static Mutex<()> {
        static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_env_vars<F>(vars: &[(&str, Option<&str>)], test: F)
    where
        F: FnOnce(),
    {
        let _guard = env_lock().lock().expect("env lock");
        let backup = vars
            .iter()
            .map(|(name, _)| ((*name).to_owned(), std::env::var(name).ok()))
            .collect::<Vec<_>>();

        for (name, value) in vars {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }

        test();

        for (name, value) in backup {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }
    }

    fn unique_temp_dir(prefix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "folio-config-{prefix}-{nanos}-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&path).expect("create temp dir");
        path
    }

    fn remove_temp_path(path: &Path) {
        let _ = std::fs::remove_dir_all(path);
    }

    #[test]
    fn load_from_env_creates_default_config_when_missing() {
        let home = unique_temp_dir("home-defaults");
        let expected = home.join(".config").join("folio").join("config.toml");

        with_env_vars(
            &[
                ("HOME", Some(home.to_str().expect("home path"))),
                ("USERPROFILE", None),
                (ENV_FOLIO_CONFIG, None),
            ],
            || {
                let config = load_from_env().expect("load defaults");
                assert_eq!(config.contact.endpoint, DEFAULT_CONTACT_ENDPOINT);
                assert_eq!(config.chat.model, DEFAULT_CHAT_MODEL);
                assert_eq!(config.ui.status_reset_secs, DEFAULT_STATUS_RESET_SECS);
                assert_eq!(config.assets.gallery.len(), DEFAULT_GALLERY.len());
                assert!(expected.exists());
            },
        );

        remove_temp_path(&home);
    }

    #[test]
    fn load_from_env_honors_explicit_config_path() {
        let home = unique_temp_dir("home-explicit");
        let root = unique_temp_dir("explicit-path");
        let explicit = root.join("nested").join("custom.toml");
        let default = home.join(".config").join("folio").join("config.toml");

        with_env_vars(
            &[
                ("HOME", Some(home.to_str().expect("home path"))),
                ("USERPROFILE", None),
                (
                    ENV_FOLIO_CONFIG,
                    Some(explicit.to_str().expect("config path")),
                ),
            ],
            || {
                let config = load_from_env().expect("load explicit path config");
                assert!(explicit.exists());
                assert!(!default.exists());
                assert_eq!(config.chat.model, DEFAULT_CHAT_MODEL);
            },
        );

        remove_temp_path(&home);
        remove_temp_path(&root);
    }

    #[test]
    fn blank_config_env_var_is_treated_as_unset() {
        let home = unique_temp_dir("home-blank");
        let expected = home.join(".config").join("folio").join("config.toml");

        with_env_vars(
            &[
                ("HOME", Some(home.to_str().expect("home path"))),
                ("USERPROFILE", None),
                (ENV_FOLIO_CONFIG, Some("  ")),
            ],
            || {
                let config = load_from_env().expect("load config from default path");
                assert!(expected.exists());
                assert_eq!(config.contact.endpoint, DEFAULT_CONTACT_ENDPOINT);
            },
        );

        remove_temp_path(&home);
    }

    #[test]
    fn normalization_clamps_and_backfills_values() {
        let root = unique_temp_dir("normalize");
        let path = root.join("config.toml");
        std::fs::write(
            &path,
            r#"
[contact]
endpoint = "   "

[chat]
model = "  gemini-2.5-flash  "

[assets]
gallery = ["", "  ", "assets/profile/alt.png"]

[ui]
status_reset_secs = 0
transcript_line_limit = 5
"#,
        )
        .expect("write fixture config");

        let config = load_from_path(&path).expect("load fixture config");
        assert_eq!(config.contact.endpoint, DEFAULT_CONTACT_ENDPOINT);
        assert_eq!(config.chat.model, DEFAULT_CHAT_MODEL);
        assert_eq!(config.assets.gallery, vec!["assets/profile/alt.png"]);
        assert_eq!(config.ui.status_reset_secs, 1);
        assert_eq!(config.ui.transcript_line_limit, 20);

        let rewritten = std::fs::read_to_string(&path).expect("read rewritten config");
        assert!(rewritten.contains(DEFAULT_CONTACT_ENDPOINT));

        remove_temp_path(&root);
    }

    #[test]
    fn empty_gallery_falls_back_to_defaults() {
        let root = unique_temp_dir("gallery-defaults");
        let path = root.join("config.toml");
        std::fs::write(
            &path,
            r#"
[assets]
gallery = []
"#,
        )
        .expect("write fixture config");

        let config = load_from_path(&path).expect("load fixture config");
        assert_eq!(config.assets.gallery.len(), DEFAULT_GALLERY.len());

        remove_temp_path(&root);
    }
}
