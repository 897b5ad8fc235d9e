// ABOUTME: CLI argument parsing for the stepup binary
//
// Flags override values from the config file:
// - run: open the onboarding demo (default)
// - show-config: print the resolved config as TOML

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use stepup::config::StepupConfig;

/// Stepped onboarding demo for the terminal
#[derive(Parser)]
#[command(name = "stepup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Page to open on, counted from 0
    #[arg(long, global = true)]
    pub initial_index: Option<usize>,

    /// Share of the screen height each collapsed band takes
    #[arg(long, global = true)]
    pub collapsed_fraction: Option<f32>,

    /// Transition length in milliseconds, 0 disables animation
    #[arg(long, global = true)]
    pub animation_ms: Option<u64>,
}

/// Available CLI commands
#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run the onboarding demo (default if no command given)
    Run,

    /// Print the resolved configuration
    ShowConfig,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded config
    pub fn apply_overrides(&self, mut config: StepupConfig) -> StepupConfig {
        if let Some(index) = self.initial_index {
            config.initial_index = index;
        }
        if let Some(fraction) = self.collapsed_fraction {
            config.collapsed_height_fraction = fraction;
        }
        if let Some(ms) = self.animation_ms {
            config.animation_ms = ms;
        }
        config
    }
}
