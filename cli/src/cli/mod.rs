use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

use crate::config::ConfigOverrides;

/// Top-level CLI parser for the `stratos` binary.
#[derive(Debug, Parser)]
#[command(name = "stratos", version, about = "Stratos PaaS management client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Stratos manager URL, e.g. https://localhost:9443
    #[arg(long, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// Username for Basic authentication
    #[arg(long, global = true)]
    pub username: Option<String>,

    /// Password for Basic authentication
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long, global = true)]
    pub insecure: bool,

    /// Output format: table, json
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (errors only in the log)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }

    /// Connection settings given on the command line, as the top config layer.
    #[must_use]
    pub fn config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            url: self.url.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            insecure: self.insecure.then_some(true),
        }
    }
}
