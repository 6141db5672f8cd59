use clap::{Parser, Subcommand};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use url::Url;

/// Config file picked up from the working directory when none is given.
const CWD_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE", global = true)]
    pub config: Option<String>,

    /// Port the shell listens on
    #[arg(long, env = "PORT", global = true)]
    pub port: Option<u16>,

    /// Full chat list endpoint, e.g. http://localhost:8000/health
    #[arg(long, env = "BACKEND_URL", global = true)]
    pub backend_url: Option<String>,

    /// Transport timeout for backend calls, in seconds
    #[arg(long, env = "BACKEND_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve the chat shell (default)
    Serve,
    /// Fetch the chat list once and print it as JSON
    Chats,
    /// Send a prompt to the backend and print the answer
    Prompt {
        /// Message text
        message: String,
    },
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub shell: ShellConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

/// Location of the chat backend.
#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    /// `http` or `https`.
    pub scheme: String,
    pub host: String,
    pub port: u16,
    /// Path of the chat list resource.
    pub path: String,
    /// No timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl BackendConfig {
    /// URL of the chat list resource.
    pub fn endpoint(&self) -> Result<Url, url::ParseError> {
        let path = if self.path.starts_with('/') {
            self.path.clone()
        } else {
            format!("/{}", self.path)
        };
        Url::parse(&format!(
            "{}://{}:{}{}",
            self.scheme, self.host, self.port, path
        ))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShellConfig {
    pub title: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Self::from_cli(&cli)
    }

    /// Layer defaults, config file, `CHAT_SHELL_*` env vars and CLI flags,
    /// lowest precedence first.
    pub fn from_cli(cli: &Cli) -> Result<Self, config::ConfigError> {
        let mut builder = Config::builder()
            .set_default("server.port", 4200)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("backend.scheme", "http")?
            .set_default("backend.host", "localhost")?
            .set_default("backend.port", 8000)?
            .set_default("backend.path", "/health")?
            .set_default("shell.title", "Chats")?;

        if let Some(path) = &cli.config {
            builder = builder.add_source(File::from(Path::new(path)).required(true));
        } else if Path::new(CWD_CONFIG_FILE).exists() {
            builder = builder.add_source(File::from(Path::new(CWD_CONFIG_FILE)));
        }

        // E.g. CHAT_SHELL_BACKEND__PORT=9000
        builder = builder.add_source(
            Environment::with_prefix("CHAT_SHELL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(raw) = &cli.backend_url {
            let url = Url::parse(raw).map_err(|e| {
                config::ConfigError::Message(format!("invalid backend URL {raw}: {e}"))
            })?;
            let host = url.host_str().ok_or_else(|| {
                config::ConfigError::Message(format!("backend URL {raw} has no host"))
            })?;
            builder = builder
                .set_override("backend.scheme", url.scheme())?
                .set_override("backend.host", host)?
                .set_override("backend.path", url.path())?;
            if let Some(port) = url.port_or_known_default() {
                builder = builder.set_override("backend.port", i64::from(port))?;
            }
        }
        if let Some(secs) = cli.timeout_secs {
            builder = builder.set_override("backend.timeout_secs", secs)?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}
