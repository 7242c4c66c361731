//! Configuration layer with layered precedence.
//!
//! Values are resolved from, lowest to highest: the bundled defaults file, an
//! optional `cambio.toml` in the working directory, an explicit `--config-file`,
//! `CAMBIO__*` environment variables, the platform's conventional variables
//! (`OPENAI_API_KEY`, `MOCK_GENERATE`), and finally CLI flags.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use clap::builder::BoolishValueParser;
use clap::{Args, Parser, Subcommand};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use url::Url;

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "cambio";
const ENV_PREFIX: &str = "CAMBIO";
const ENV_SEPARATOR: &str = "__";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_GENERATION_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_GENERATION_MODEL: &str = "gpt-4o-mini";

/// Command-line interface for the cambio binary.
#[derive(Debug, Parser)]
#[command(name = "cambio", version, about = "Vehicle comparison publishing service")]
pub struct CliArgs {
    /// Path to an additional configuration file, loaded above the defaults.
    #[arg(
        long = "config-file",
        env = "CAMBIO_CONFIG_FILE",
        value_name = "PATH",
        global = true
    )]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the HTTP service (the default when no subcommand is given).
    Serve(Box<ServeArgs>),
}

#[derive(Debug, Clone, Default, Args)]
pub struct ServeArgs {
    #[command(flatten)]
    pub overrides: ServeOverrides,
}

/// Flags that override individual settings for the `serve` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ServeOverrides {
    /// Host the HTTP listener binds to.
    #[arg(long = "server-host", value_name = "HOST")]
    pub server_host: Option<String>,

    /// Port the HTTP listener binds to.
    #[arg(long = "server-port", value_name = "PORT")]
    pub server_port: Option<u16>,

    /// Base log level (trace, debug, info, warn, error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON instead of the compact format.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,

    /// Serve canned drafts instead of calling the generation provider.
    #[arg(
        long = "generation-mock",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub generation_mock: Option<bool>,

    /// Base URL of the generation provider API.
    #[arg(long = "generation-base-url", value_name = "URL")]
    pub generation_base_url: Option<String>,

    /// Model requested from the generation provider.
    #[arg(long = "generation-model", value_name = "MODEL")]
    pub generation_model: Option<String>,
}

/// Fully validated runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub generation: GenerationSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub addr: SocketAddr,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Clone)]
pub struct GenerationSettings {
    /// Provider credential. `None` means generation runs unconfigured and the
    /// endpoint reports that instead of calling out.
    pub api_key: Option<String>,
    pub mock: bool,
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawSettings {
    server: RawServerSettings,
    logging: RawLoggingSettings,
    generation: RawGenerationSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawServerSettings {
    host: Option<String>,
    port: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawGenerationSettings {
    api_key: Option<String>,
    mock: Option<bool>,
    base_url: Option<String>,
    model: Option<String>,
}

impl RawSettings {
    /// Applies the platform's conventional environment variables. These win
    /// over file values but stay below explicit CLI flags.
    fn apply_conventional_env(&mut self) {
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            let trimmed = key.trim();
            if !trimmed.is_empty() {
                self.generation.api_key = Some(trimmed.to_string());
            }
        }
        if let Ok(flag) = std::env::var("MOCK_GENERATE") {
            self.generation.mock = Some(flag == "1");
        }
    }

    fn apply_serve_overrides(&mut self, overrides: &ServeOverrides) {
        if let Some(host) = overrides.server_host.as_ref() {
            self.server.host = Some(host.clone());
        }
        if let Some(port) = overrides.server_port {
            self.server.port = Some(port);
        }
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
        if let Some(mock) = overrides.generation_mock {
            self.generation.mock = Some(mock);
        }
        if let Some(base_url) = overrides.generation_base_url.as_ref() {
            self.generation.base_url = Some(base_url.clone());
        }
        if let Some(model) = overrides.generation_model.as_ref() {
            self.generation.model = Some(model.clone());
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        Ok(Self {
            server: build_server_settings(raw.server)?,
            logging: build_logging_settings(raw.logging)?,
            generation: build_generation_settings(raw.generation)?,
        })
    }
}

fn build_server_settings(raw: RawServerSettings) -> Result<ServerSettings, LoadError> {
    let host = raw.host.unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = raw.port.unwrap_or(DEFAULT_PORT);
    if port == 0 {
        return Err(LoadError::invalid("server.port", "must be non-zero"));
    }
    let addr = parse_socket_addr(&host, port)?;
    Ok(ServerSettings { addr })
}

fn build_logging_settings(raw: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level_text = raw.level.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    let level = LevelFilter::from_str(level_text.trim()).map_err(|_| {
        LoadError::invalid(
            "logging.level",
            format!("`{level_text}` is not a log level"),
        )
    })?;
    let format = if raw.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    Ok(LoggingSettings { level, format })
}

fn build_generation_settings(raw: RawGenerationSettings) -> Result<GenerationSettings, LoadError> {
    let api_key = raw
        .api_key
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty());

    let base_url = raw
        .base_url
        .unwrap_or_else(|| DEFAULT_GENERATION_BASE_URL.to_string())
        .trim()
        .trim_end_matches('/')
        .to_string();
    let parsed = Url::parse(&base_url).map_err(|err| {
        LoadError::invalid("generation.base_url", format!("`{base_url}`: {err}"))
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(LoadError::invalid(
            "generation.base_url",
            "scheme must be http or https",
        ));
    }

    let model = raw
        .model
        .unwrap_or_else(|| DEFAULT_GENERATION_MODEL.to_string())
        .trim()
        .to_string();
    if model.is_empty() {
        return Err(LoadError::invalid("generation.model", "must not be empty"));
    }

    Ok(GenerationSettings {
        api_key,
        mock: raw.mock.unwrap_or(false),
        base_url,
        model,
    })
}

fn parse_socket_addr(host: &str, port: u16) -> Result<SocketAddr, LoadError> {
    format!("{host}:{port}").parse().map_err(|_| {
        LoadError::invalid("server.host", format!("`{host}` is not a bindable host"))
    })
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to assemble configuration: {0}")]
    Build(#[from] ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: String, reason: String },
}

impl LoadError {
    fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Resolves settings for the given CLI invocation.
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_deref() {
        builder = builder.add_source(File::from(path).required(true));
    }

    builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;
    raw.apply_conventional_env();

    match cli.command.as_ref() {
        Some(Command::Serve(args)) => raw.apply_serve_overrides(&args.overrides),
        None => {}
    }

    Settings::from_raw(raw)
}

/// Parses the process arguments and resolves settings in one step.
pub fn load_with_cli() -> Result<(CliArgs, Settings), LoadError> {
    let cli = CliArgs::parse();
    let settings = load(&cli)?;
    Ok((cli, settings))
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    fn raw_with_base_url(base_url: &str) -> RawGenerationSettings {
        RawGenerationSettings {
            base_url: Some(base_url.to_string()),
            ..RawGenerationSettings::default()
        }
    }

    #[test]
    fn defaults_produce_a_local_listener() {
        let settings = Settings::from_raw(RawSettings::default()).unwrap();
        assert_eq!(settings.server.addr.to_string(), "127.0.0.1:3000");
        assert_eq!(settings.logging.level, LevelFilter::INFO);
        assert_eq!(settings.logging.format, LogFormat::Compact);
        assert!(!settings.generation.mock);
        assert!(settings.generation.api_key.is_none());
        assert_eq!(settings.generation.base_url, DEFAULT_GENERATION_BASE_URL);
    }

    #[test]
    fn serve_overrides_beat_raw_values() {
        let mut raw = RawSettings::default();
        raw.server.port = Some(8080);
        raw.logging.json = Some(false);
        raw.generation.mock = Some(false);

        let overrides = ServeOverrides {
            server_port: Some(4000),
            log_json: Some(true),
            generation_mock: Some(true),
            ..ServeOverrides::default()
        };
        raw.apply_serve_overrides(&overrides);

        let settings = Settings::from_raw(raw).unwrap();
        assert_eq!(settings.server.addr.port(), 4000);
        assert_eq!(settings.logging.format, LogFormat::Json);
        assert!(settings.generation.mock);
    }

    #[test]
    fn zero_port_is_rejected() {
        let mut raw = RawSettings::default();
        raw.server.port = Some(0);
        let err = Settings::from_raw(raw).unwrap_err();
        assert!(matches!(err, LoadError::Invalid { ref key, .. } if key == "server.port"));
    }

    #[test]
    fn bogus_log_level_is_rejected() {
        let mut raw = RawSettings::default();
        raw.logging.level = Some("loud".to_string());
        let err = Settings::from_raw(raw).unwrap_err();
        assert!(matches!(err, LoadError::Invalid { ref key, .. } if key == "logging.level"));
    }

    #[test]
    fn base_url_must_be_http() {
        let err = build_generation_settings(raw_with_base_url("ftp://example.com")).unwrap_err();
        assert!(matches!(err, LoadError::Invalid { ref key, .. } if key == "generation.base_url"));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let generation =
            build_generation_settings(raw_with_base_url("https://llm.internal/v1/")).unwrap();
        assert_eq!(generation.base_url, "https://llm.internal/v1");
    }

    #[test]
    fn blank_api_key_counts_as_absent() {
        let raw = RawGenerationSettings {
            api_key: Some("   ".to_string()),
            ..RawGenerationSettings::default()
        };
        let generation = build_generation_settings(raw).unwrap();
        assert!(generation.api_key.is_none());
    }

    #[test]
    #[serial]
    fn conventional_env_sets_key_and_mock() {
        unsafe {
            std::env::set_var("OPENAI_API_KEY", "sk-test-123");
            std::env::set_var("MOCK_GENERATE", "1");
        }

        let mut raw = RawSettings::default();
        raw.apply_conventional_env();

        unsafe {
            std::env::remove_var("OPENAI_API_KEY");
            std::env::remove_var("MOCK_GENERATE");
        }

        assert_eq!(raw.generation.api_key.as_deref(), Some("sk-test-123"));
        assert_eq!(raw.generation.mock, Some(true));
    }

    #[test]
    #[serial]
    fn mock_flag_requires_the_literal_one() {
        unsafe {
            std::env::set_var("MOCK_GENERATE", "true");
        }

        let mut raw = RawSettings::default();
        raw.apply_conventional_env();

        unsafe {
            std::env::remove_var("MOCK_GENERATE");
        }

        assert_eq!(raw.generation.mock, Some(false));
    }

    #[test]
    #[serial]
    fn empty_conventional_key_is_ignored() {
        unsafe {
            std::env::set_var("OPENAI_API_KEY", "  ");
        }

        let mut raw = RawSettings::default();
        raw.generation.api_key = Some("from-file".to_string());
        raw.apply_conventional_env();

        unsafe {
            std::env::remove_var("OPENAI_API_KEY");
        }

        assert_eq!(raw.generation.api_key.as_deref(), Some("from-file"));
    }

    #[test]
    fn cli_parses_serve_with_overrides() {
        let cli = CliArgs::parse_from([
            "cambio",
            "serve",
            "--server-port",
            "9090",
            "--log-json",
            "true",
            "--generation-mock",
            "yes",
        ]);
        let Some(Command::Serve(args)) = cli.command else {
            panic!("expected the serve command");
        };
        assert_eq!(args.overrides.server_port, Some(9090));
        assert_eq!(args.overrides.log_json, Some(true));
        assert_eq!(args.overrides.generation_mock, Some(true));
    }

    #[test]
    fn cli_defaults_to_no_command() {
        let cli = CliArgs::parse_from(["cambio"]);
        assert!(cli.command.is_none());
        assert!(cli.config_file.is_none());
    }
}
