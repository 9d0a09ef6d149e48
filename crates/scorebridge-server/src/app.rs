//! Application wiring: logging, configuration, command dispatch.

use tracing_subscriber::EnvFilter;

use scorebridge_core::{Error, Result, ScorebridgeConfig};

use crate::cli::{BaseCommand, CliArgs, ConfigAction};
use crate::http;

// ============================================================================
// App
// ============================================================================

/// The scorebridge application.
pub struct App {
    config: ScorebridgeConfig,
    version: String,
}

impl App {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(args: &CliArgs) -> Result<Self> {
        let config = ScorebridgeConfig::load(args.config.as_deref())?;
        Ok(Self::new(config))
    }

    /// Create an application over an already-loaded config.
    pub fn new(config: ScorebridgeConfig) -> Self {
        Self {
            config,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Get a reference to the loaded configuration.
    pub fn config(&self) -> &ScorebridgeConfig {
        &self.config
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // Ignore error if a subscriber is already set (e.g. in tests).
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }

    /// Run the application with the given arguments.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);

        match args.command {
            // Running with no subcommand serves, matching how the shim is
            // deployed in containers.
            None => http::serve(&self.config, None).await,
            Some(BaseCommand::Serve { port }) => http::serve(&self.config, port).await,
            Some(BaseCommand::Version) => {
                println!("scorebridge {}", self.version);
                Ok(())
            }
            Some(BaseCommand::Health) => {
                self.report_health();
                Ok(())
            }
            Some(BaseCommand::Config(config_cmd)) => {
                self.handle_config(args.config.as_deref(), config_cmd.command)
            }
        }
    }

    /// Report configuration health without making network calls.
    fn report_health(&self) {
        let scoring = &self.config.scoring;
        let url = if scoring.url.is_empty() { "unset" } else { "set" };
        let key = if scoring.api_key.is_empty() { "unset" } else { "set" };
        println!("scoring URL: {url}");
        println!("API key: {key}");
        println!(
            "deployment routing: {}",
            if scoring.deployment.is_empty() {
                "default".to_string()
            } else {
                scoring.deployment.clone()
            }
        );
    }

    /// Dispatch config subcommands.
    fn handle_config(&self, config_path: Option<&str>, action: ConfigAction) -> Result<()> {
        match action {
            ConfigAction::Path => {
                match ScorebridgeConfig::resolve_config_path(config_path) {
                    Some(path) => println!("{}", path.display()),
                    None => println!("no config path could be resolved"),
                }
                Ok(())
            }
            ConfigAction::Init { file, force } => {
                let path = file
                    .map(std::path::PathBuf::from)
                    .or_else(ScorebridgeConfig::default_config_path)
                    .ok_or_else(|| Error::config("no config path could be resolved"))?;

                if path.exists() && !force {
                    return Err(Error::config(format!(
                        "{} already exists (use --force to overwrite)",
                        path.display()
                    )));
                }
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&path, ScorebridgeConfig::default().to_toml_string()?)?;
                println!("wrote {}", path.display());
                Ok(())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
