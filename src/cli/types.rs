use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::commands::{Histogram, ParamSpec};
use crate::runtime::CommandSpec;

#[derive(Debug, Parser)]
#[command(
    name = "citra",
    version,
    about = "Classroom image processing: point, arithmetic, logic, morphology and filter operations"
)]
pub(super) struct Cli {
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    Info {
        input: PathBuf,
    },
    Ops {
        #[command(subcommand)]
        command: OpsCommand,
    },
    /// Runs one command against INPUT and optionally saves the result.
    Apply {
        #[arg(long)]
        input: PathBuf,
        /// Operand for two-image commands; conformed to INPUT's size and planes.
        #[arg(long)]
        second: Option<PathBuf>,
        #[arg(long)]
        command: String,
        /// Answer for the command's prompt; its default is used when absent.
        #[arg(long)]
        param: Option<String>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Opens the desktop window, optionally preloading an image.
    View {
        input: Option<PathBuf>,
    },
}

#[derive(Debug, Subcommand)]
pub(super) enum OpsCommand {
    /// Lists toolbar commands; `--raw` prints the underlying operation schemas instead.
    List {
        #[arg(long)]
        raw: bool,
    },
}

#[derive(Debug, Serialize)]
pub(super) struct ImageInfo {
    pub(super) width: u32,
    pub(super) height: u32,
    pub(super) planes: usize,
    pub(super) source: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct CommandEntry {
    #[serde(flatten)]
    pub(super) command: &'static CommandSpec,
    pub(super) parameter: Option<ParamSpec>,
}

#[derive(Debug, Serialize)]
pub(super) struct ApplyReport {
    pub(super) command: &'static str,
    pub(super) status: String,
    pub(super) warnings: Vec<String>,
    pub(super) histogram: Option<Histogram>,
    pub(super) output: Option<String>,
}
