#![forbid(unsafe_code)]

//! greenmix binary entry point.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process;

use greenmix::cli::{self, Action, Opts};
use greenmix::{Config, Error, compose, logging, read_measurement};

fn main() {
    let opts = match Opts::parse() {
        Ok(Action::Run(opts)) => opts,
        Ok(Action::Help) => {
            println!("{}", cli::HELP_TEXT);
            return;
        }
        Ok(Action::Version) => {
            println!("{}", cli::version_line());
            return;
        }
        Err(msg) => {
            eprintln!("{msg}\n\nRun with --help for usage.");
            process::exit(2);
        }
    };

    logging::init();

    if let Err(e) = run(&opts) {
        tracing::error!(error = %e, "greenmix failed");
        eprintln!("greenmix: {e}");
        process::exit(1);
    }
}

fn run(opts: &Opts) -> greenmix::Result<()> {
    let mut config = match &opts.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(width) = opts.line_width {
        config = config.with_line_width(width)?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if opts.print_config {
        serde_json::to_writer_pretty(&mut out, &config.to_file_model())?;
        writeln!(out)?;
        return Ok(());
    }
    if opts.list {
        for (code, glyph, name) in config.entries() {
            writeln!(out, "{code}  {glyph}  {name}")?;
        }
        return Ok(());
    }

    let measurement = match &opts.input {
        Some(path) => {
            let file = File::open(path).map_err(|source| Error::Io {
                path: Some(path.clone()),
                source,
            })?;
            read_measurement(BufReader::new(file), config.categories())?
        }
        None => read_measurement(io::stdin().lock(), config.categories())?,
    };

    let composition = compose(&measurement, &config)?;
    writeln!(out, "{}", composition.message)?;
    Ok(())
}
