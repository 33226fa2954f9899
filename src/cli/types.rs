//! CLI type definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::archive::{HistoryArgs, SaveArgs};
use crate::cli::commands::serve::ServeArgs;
use crate::cli::commands::text::{TextArgs, TransformArgs};

#[derive(Parser, Debug)]
#[command(name = "orbit")]
#[command(about = "Orbit - essay editor backend", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Config file to use instead of .orbit/config.yaml and .orbit/local.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP backend for the editor client
    Serve(ServeArgs),

    /// Score an essay: clarity, impact, readability and tone
    Analyze(TextArgs),

    /// Rewrite an essay in the formal, creative and concise styles
    Rephrase(TextArgs),

    /// Apply basic capitalisation and contraction fixes
    Grammar(TextArgs),

    /// Keep the first three sentences
    Summarize(TextArgs),

    /// Shift an essay towards a formal, casual or concise tone
    Transform(TransformArgs),

    /// Archive an essay together with its analysis
    Save(SaveArgs),

    /// List recently archived essays
    History(HistoryArgs),

    /// Show average scores across the archive
    Stats,
}
