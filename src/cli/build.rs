//! Build command implementation.
//!
//! Renders weave documents and writes PNG output.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::find_documents;
use crate::document::{RenderOptions, WeaveDocument};
use crate::error::{Result, WeaveError};
use crate::output::{display_path, plural, Printer};
use crate::render::write_png;
use crate::threads::thread_strip;
use crate::types::PixelBuffer;

/// Height of thread preview strips.
const THREAD_STRIP_HEIGHT: usize = 50;

/// Times a thread preview repeats its sequence.
const THREAD_STRIP_REPEATS: usize = 3;

/// Weave images from *.weave.yaml documents
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Weave documents or directories to scan (default: current directory)
    pub paths: Vec<PathBuf>,

    /// Output directory
    #[arg(long, short, default_value = "dist")]
    pub output: PathBuf,

    /// Scale factor for output (overrides the document's scale)
    #[arg(long)]
    pub scale: Option<u32>,

    /// Seed for slubbing (overrides the document's seed)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable slubbing
    #[arg(long, conflicts_with = "seed")]
    pub no_slub: bool,

    /// Also write the warp and weft layers
    #[arg(long)]
    pub layers: bool,

    /// Also write thread preview strips
    #[arg(long)]
    pub threads: bool,

    /// Also write a JSON summary of each weave
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    if !args.output.exists() {
        fs::create_dir_all(&args.output).map_err(|e| WeaveError::Io {
            path: args.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let paths = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths.clone()
    };
    let documents = find_documents(&paths)?;

    let options = RenderOptions {
        seed: args.seed,
        no_slub: args.no_slub,
    };

    let mut built = 0;
    for path in &documents {
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        if !is_yaml {
            printer.warning("Skipping", &display_path(path));
            continue;
        }

        process_document(path, &args, options, printer)?;
        built += 1;
    }

    printer.status(
        "Finished",
        &format!("{} to {}", plural(built, "weave", "weaves"), display_path(&args.output)),
    );

    Ok(())
}

/// Render one document and write its outputs.
fn process_document(
    path: &Path,
    args: &BuildArgs,
    options: RenderOptions,
    printer: &Printer,
) -> Result<()> {
    let doc = WeaveDocument::load(path)?;
    let name = doc.name().to_string();
    let scale = args.scale.or(doc.scale).unwrap_or(1);

    let output = doc.render(options)?;
    let summary = &output.summary;
    printer.status(
        "Weaving",
        &format!(
            "{} ({}x{}, {}, {})",
            name,
            summary.width,
            summary.height,
            summary.draft,
            plural(summary.shots, "shot", "shots")
        ),
    );

    write_output(&output.cloth, &args.output, &name, scale, printer)?;

    if args.layers {
        write_output(&output.warp, &args.output, &format!("{}-warp", name), scale, printer)?;
        write_output(&output.weft, &args.output, &format!("{}-weft", name), scale, printer)?;
    }

    if args.threads {
        for (layer, colours) in [("warp", &output.warp_colours), ("weft", &output.weft_colours)] {
            let strip = thread_strip(colours, THREAD_STRIP_HEIGHT, THREAD_STRIP_REPEATS);
            write_output(&strip, &args.output, &format!("{}-{}-thread", name, layer), 1, printer)?;
        }
    }

    if args.json {
        let json_path = args.output.join(format!("{}.json", name));
        let json = serde_json::to_string_pretty(summary).map_err(|e| WeaveError::Parse {
            message: format!("Failed to serialize summary: {}", e),
            help: None,
        })?;
        fs::write(&json_path, json).map_err(|e| WeaveError::Io {
            path: json_path.clone(),
            message: format!("Failed to write summary: {}", e),
        })?;
        printer.info("Wrote", &display_path(&json_path));
    }

    Ok(())
}

fn write_output(
    buffer: &PixelBuffer,
    dir: &Path,
    name: &str,
    scale: u32,
    printer: &Printer,
) -> Result<()> {
    let path = dir.join(format!("{}.png", name));
    write_png(buffer, &path, scale)?;
    printer.info("Wrote", &display_path(&path));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const DOC: &str = r##"
thread_width: 2
ends: 12
shots: 8
draft: rosepath
warp:
  length: 40
  stops:
    - [0.0, "#FF0000"]
    - [0.5, "#0080FF"]
    - [0.99, "#FF0000"]
weft:
  colour: "#FF6400"
"##;

    fn args(paths: Vec<PathBuf>, output: PathBuf) -> BuildArgs {
        BuildArgs {
            paths,
            output,
            scale: None,
            seed: None,
            no_slub: false,
            layers: false,
            threads: false,
            json: false,
        }
    }

    #[test]
    fn test_build_simple_weave() {
        let dir = tempdir().unwrap();
        let doc_path = dir.path().join("rose.weave.yaml");
        let output_dir = dir.path().join("output");
        fs::write(&doc_path, DOC).unwrap();

        run(args(vec![doc_path], output_dir.clone()), &Printer::plain()).unwrap();

        let output_png = output_dir.join("rose.png");
        assert!(output_png.exists());

        let img = image::open(&output_png).unwrap().to_rgb8();
        assert_eq!(img.width(), 24);
        assert_eq!(img.height(), 16);
    }

    #[test]
    fn test_build_with_document_scale() {
        let dir = tempdir().unwrap();
        let doc_path = dir.path().join("scaled.weave.yaml");
        let output_dir = dir.path().join("output");
        fs::write(&doc_path, format!("{}scale: 2\n", DOC)).unwrap();

        run(args(vec![doc_path.clone()], output_dir.clone()), &Printer::plain()).unwrap();
        let img = image::open(output_dir.join("scaled.png")).unwrap().to_rgb8();
        assert_eq!((img.width(), img.height()), (48, 32));

        // CLI scale overrides the document
        let mut cli = args(vec![doc_path], output_dir.clone());
        cli.scale = Some(3);
        run(cli, &Printer::plain()).unwrap();
        let img = image::open(output_dir.join("scaled.png")).unwrap().to_rgb8();
        assert_eq!((img.width(), img.height()), (72, 48));
    }

    #[test]
    fn test_build_directory_with_extras() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("cloth");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("a.weave.yaml"), DOC).unwrap();
        fs::write(src.join("b.weave.yaml"), DOC.replace("rosepath", "honeysuckle")).unwrap();
        let output_dir = dir.path().join("output");

        let mut cli = args(vec![src], output_dir.clone());
        cli.layers = true;
        cli.threads = true;
        cli.json = true;
        cli.seed = Some(5);
        run(cli, &Printer::plain()).unwrap();

        for name in ["a", "b"] {
            assert!(output_dir.join(format!("{}.png", name)).exists());
            assert!(output_dir.join(format!("{}-warp.png", name)).exists());
            assert!(output_dir.join(format!("{}-weft.png", name)).exists());
            assert!(output_dir.join(format!("{}-weft-thread.png", name)).exists());
        }

        let strip = image::open(output_dir.join("a-warp-thread.png")).unwrap();
        assert_eq!(strip.width(), 40 * 3);
        assert_eq!(strip.height(), 50);

        let summary: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output_dir.join("b.json")).unwrap()).unwrap();
        assert_eq!(summary["draft"], "honeysuckle");
        assert_eq!(summary["seed"], 5);
        assert_eq!(summary["raised_shows"], "weft");
    }

    #[test]
    fn test_build_invalid_document_fails() {
        let dir = tempdir().unwrap();
        let doc_path = dir.path().join("bad.weave.yaml");
        fs::write(&doc_path, DOC.replace("rosepath", "no-such-draft")).unwrap();

        let result = run(args(vec![doc_path], dir.path().join("output")), &Printer::plain());
        assert!(matches!(result, Err(WeaveError::Parse { .. })));
    }
}
