mod error;
mod files;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use literal_minify::Options;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Strip insignificant whitespace from markup and template files
#[derive(Parser, Debug)]
#[command(name = "literal-minify", author, version, about)]
struct Cli {
    /// Rewrite each file with its minified text
    #[arg(short, long, action = ArgAction::SetTrue)]
    in_place: bool,

    /// Write the result here instead of stdout (single input file only)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Extensions picked up when walking directories
    #[arg(long = "ext", default_values = ["html", "htm", "hbs", "cshtml"])]
    extensions: Vec<String>,

    /// Leave the text untouched, as design-time tooling would see it
    #[arg(long, action = ArgAction::SetTrue)]
    pass_through: bool,

    /// Log debug output
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Files or directories to minify
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("literal_minify={level}"))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    if cli.output.is_some() && cli.in_place {
        return Err(Error::OutputWithInPlace);
    }
    let paths = files::collect(&cli.inputs, &cli.extensions)?;
    if cli.output.is_some() && paths.len() != 1 {
        return Err(Error::OutputWithMany(paths.len()));
    }
    let options = if cli.pass_through {
        Options::pass_through()
    } else {
        Options::default()
    };

    let mut stdout = io::stdout().lock();
    for path in &paths {
        let minified = files::minify_file(path, options)?;
        match &cli.output {
            Some(output) => files::write(output, &minified)?,
            None if cli.in_place => files::write(path, &minified)?,
            None => stdout
                .write_all(minified.as_bytes())
                .and_then(|()| stdout.write_all(b"\n"))
                .map_err(|source| Error::Write {
                    path: PathBuf::from("<stdout>"),
                    source,
                })?,
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
