pub mod build;
pub mod completions;
pub mod draft;
pub mod stencil;

use clap::{ArgAction, Parser, Subcommand};

/// weaver - Weave images from loom drafts
#[derive(Parser, Debug)]
#[command(name = "weaver")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Weave images from *.weave.yaml documents
    Build(build::BuildArgs),

    /// List builtin drafts or print a draft's drawdown
    Draft(draft::DraftArgs),

    /// Check whether an image can be cut as a stencil
    Stencil(stencil::StencilArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
