//! CLI argument definitions and shared statics.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

pub static FILE_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();
/// Whether the user asked for JSON output (controls structured error output).
pub static JSON_MODE: OnceLock<bool> = OnceLock::new();

#[derive(Parser, Debug)]
#[command(name = "fruitshop", version, about = "Fruit shop capability demo")]
pub struct Cli {
    /// Path to config TOML (optional; defaults reproduce the fixed demo)
    #[arg(long, value_name = "FILE", default_value = "etc/fruitshop.toml")]
    pub config: PathBuf,

    /// Emit JSON lines instead of human-readable text
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console log level (error|warn|info|debug|trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Command to execute
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full fixed demonstration: pricing, then devices
    Demo,
    /// Price one item for a given quantity
    Price {
        /// Item name: cherry | damson | melon | lettuce
        item: String,
        /// Kilos, for items sold by weight
        #[arg(long, value_name = "KG", allow_negative_numbers = true)]
        kilos: Option<f64>,
        /// Units, for items sold by the piece
        #[arg(long, value_name = "COUNT", allow_negative_numbers = true)]
        units: Option<f64>,
    },
    /// Run only the device portion of the demonstration
    Devices,
}
