use clap::Parser;
use miette::Result;
use weaver::cli::{Cli, Commands};
use weaver::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    weaver::logging::init_logging(cli.verbose);
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => weaver::cli::build::run(args, &printer)?,
        Commands::Draft(args) => weaver::cli::draft::run(args, &printer)?,
        Commands::Stencil(args) => weaver::cli::stencil::run(args, &printer)?,
        Commands::Completions(args) => weaver::cli::completions::run(args)?,
    }

    Ok(())
}
