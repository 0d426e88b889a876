//! Draft command implementation.
//!
//! Lists the builtin drafts, or prints a drawdown of one draft.

use std::path::PathBuf;

use clap::Args;

use crate::draft::{BuiltinDrafts, Draft};
use crate::error::{Result, WeaveError};
use crate::loom::Loom;
use crate::output::{plural, Printer};
use crate::types::{Layer, WeaveConfig};

/// List builtin drafts or print a draft's drawdown
#[derive(Args, Debug)]
pub struct DraftArgs {
    /// Builtin draft name, or a path to a draft YAML file
    pub name: Option<String>,

    /// Ends to show (default: two threading repeats)
    #[arg(long)]
    pub ends: Option<usize>,

    /// Shots to show (default: two treadling repeats)
    #[arg(long)]
    pub shots: Option<usize>,

    /// Layer visible where an end is raised
    #[arg(long, default_value = "weft")]
    pub raised_shows: Layer,
}

pub fn run(args: DraftArgs, printer: &Printer) -> Result<()> {
    let Some(name) = &args.name else {
        list(printer);
        return Ok(());
    };

    let draft = load_draft(name)?;
    print!("{}", drawdown(&draft, &args)?);
    Ok(())
}

fn list(printer: &Printer) {
    for draft in BuiltinDrafts::all() {
        println!(
            "{:<18}{}",
            draft.name,
            printer.dim(&format!(
                "{}, repeat of {}, {}",
                plural(draft.heddles.len(), "heddle", "heddles"),
                plural(draft.repeat(), "end", "ends"),
                plural(draft.treadling.len(), "step", "steps")
            ))
        );
    }
}

fn load_draft(name: &str) -> Result<Draft> {
    if let Some(draft) = BuiltinDrafts::get(name) {
        return Ok(draft);
    }

    let path = PathBuf::from(name);
    if path.is_file() {
        let content = std::fs::read_to_string(&path).map_err(|e| WeaveError::Io {
            path: path.clone(),
            message: format!("Failed to read draft: {}", e),
        })?;
        return Draft::parse(&content);
    }

    Err(WeaveError::Parse {
        message: format!("Draft not found: {}", name),
        help: Some("Run 'weaver draft' to list builtin drafts, or pass a draft file".to_string()),
    })
}

/// Render the drawdown text for a draft at the requested size.
fn drawdown(draft: &Draft, args: &DraftArgs) -> Result<String> {
    let ends = args.ends.unwrap_or(draft.repeat() * 2);
    let shots = args.shots.unwrap_or(draft.treadling.len() * 2);

    let cfg = WeaveConfig::new(1, ends, shots)?;
    let loom = Loom::new(draft.setup(ends)?, cfg, args.raised_shows)?;
    Ok(loom.drawdown())
}
