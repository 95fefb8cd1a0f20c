use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;

use crate::catalog::{CatalogError, MessageCatalog};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub chat: ChatConfig,
    pub locale: LocaleConfig,
    pub logging: LoggingConfig,
}

/// Credentials for the chat platform the bot is registered with. Both values
/// are provided by the environment at process start and never logged.
#[derive(Clone, Debug)]
pub struct ChatConfig {
    pub channel_secret: SecretString,
    pub channel_token: SecretString,
}

/// The currency marker plus the reply templates. The engine treats the marker
/// as a parameter, never a global; this section is the single place it enters
/// the process.
#[derive(Clone, Debug)]
pub struct LocaleConfig {
    pub currency_marker: String,
    pub catalog: MessageCatalog,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub channel_secret: Option<String>,
    pub channel_token: Option<String>,
    pub currency_marker: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("environment variable interpolation failed for `{var}`")]
    MissingEnvInterpolation { var: String },
    #[error("unterminated environment interpolation expression")]
    UnterminatedInterpolation,
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl From<CatalogError> for ConfigError {
    fn from(value: CatalogError) -> Self {
        Self::Validation(value.to_string())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            chat: ChatConfig {
                channel_secret: String::new().into(),
                channel_token: String::new().into(),
            },
            locale: LocaleConfig {
                currency_marker: "円".to_string(),
                catalog: MessageCatalog::default(),
            },
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

impl AppConfig {
    /// Layered load: defaults, then the config file (with `${VAR}`
    /// interpolation), then `DEALCHECK_*` environment variables, then
    /// programmatic overrides, then validation.
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch);
        } else if options.require_file {
            let expected = options.config_path.unwrap_or_else(|| PathBuf::from("dealcheck.toml"));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(chat) = patch.chat {
            if let Some(channel_secret_value) = chat.channel_secret {
                self.chat.channel_secret = channel_secret_value.into();
            }
            if let Some(channel_token_value) = chat.channel_token {
                self.chat.channel_token = channel_token_value.into();
            }
        }

        if let Some(locale) = patch.locale {
            if let Some(currency_marker) = locale.currency_marker {
                self.locale.currency_marker = currency_marker;
            }
            if let Some(advantage_two) = locale.advantage_two {
                self.locale.catalog.advantage_two = advantage_two;
            }
            if let Some(advantage_many) = locale.advantage_many {
                self.locale.catalog.advantage_many = advantage_many;
            }
            if let Some(loss_clause) = locale.loss_clause {
                self.locale.catalog.loss_clause = loss_clause;
            }
            if let Some(fallback) = locale.fallback {
                self.locale.catalog.fallback = fallback;
            }
        }

        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = read_env("DEALCHECK_CHANNEL_SECRET") {
            self.chat.channel_secret = value.into();
        }
        if let Some(value) = read_env("DEALCHECK_CHANNEL_TOKEN") {
            self.chat.channel_token = value.into();
        }

        if let Some(value) = read_env("DEALCHECK_CURRENCY_MARKER") {
            self.locale.currency_marker = value;
        }

        if let Some(value) = read_env("DEALCHECK_LOG_LEVEL") {
            self.logging.level = value;
        }
        if let Some(value) = read_env("DEALCHECK_LOG_FORMAT") {
            self.logging.format = value.parse()?;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(channel_secret) = overrides.channel_secret {
            self.chat.channel_secret = channel_secret.into();
        }
        if let Some(channel_token) = overrides.channel_token {
            self.chat.channel_token = channel_token.into();
        }
        if let Some(currency_marker) = overrides.currency_marker {
            self.locale.currency_marker = currency_marker;
        }
        if let Some(log_level) = overrides.log_level {
            self.logging.level = log_level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_chat(&self.chat)?;
        validate_locale(&self.locale)?;
        validate_logging(&self.logging)?;
        Ok(())
    }
}

fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then_some(path.to_path_buf());
    }

    [PathBuf::from("dealcheck.toml"), PathBuf::from("config/dealcheck.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;

    let interpolated = interpolate_env_vars(&raw)?;
    toml::from_str::<ConfigPatch>(&interpolated)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

fn interpolate_env_vars(input: &str) -> Result<String, ConfigError> {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && matches!(chars.peek(), Some('{')) {
            chars.next();
            let mut key = String::new();

            loop {
                match chars.next() {
                    Some('}') => break,
                    Some(next) => key.push(next),
                    None => return Err(ConfigError::UnterminatedInterpolation),
                }
            }

            let value = env::var(&key)
                .map_err(|_| ConfigError::MissingEnvInterpolation { var: key.clone() })?;
            output.push_str(&value);
            continue;
        }

        output.push(ch);
    }

    Ok(output)
}

fn validate_chat(chat: &ChatConfig) -> Result<(), ConfigError> {
    if chat.channel_secret.expose_secret().trim().is_empty() {
        return Err(ConfigError::Validation(
            "chat.channel_secret is required (set DEALCHECK_CHANNEL_SECRET)".to_string(),
        ));
    }
    if chat.channel_token.expose_secret().trim().is_empty() {
        return Err(ConfigError::Validation(
            "chat.channel_token is required (set DEALCHECK_CHANNEL_TOKEN)".to_string(),
        ));
    }
    Ok(())
}

fn validate_locale(locale: &LocaleConfig) -> Result<(), ConfigError> {
    if locale.currency_marker.trim().is_empty() {
        return Err(ConfigError::Validation(
            "locale.currency_marker must not be empty".to_string(),
        ));
    }
    if locale.currency_marker.chars().any(|ch| ch.is_ascii_digit() || ch.is_whitespace()) {
        return Err(ConfigError::Validation(
            "locale.currency_marker must not contain digits or whitespace".to_string(),
        ));
    }
    locale.catalog.validate()?;
    Ok(())
}

fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
    let level = logging.level.trim().to_ascii_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ConfigError::Validation(
            "logging.level must be one of trace|debug|info|warn|error".to_string(),
        )),
    }
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    chat: Option<ChatPatch>,
    locale: Option<LocalePatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct ChatPatch {
    channel_secret: Option<String>,
    channel_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct LocalePatch {
    currency_marker: Option<String>,
    advantage_two: Option<String>,
    advantage_many: Option<String>,
    loss_clause: Option<String>,
    fallback: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}
