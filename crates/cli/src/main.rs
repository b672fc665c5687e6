use anyhow::{bail, Result};
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use polyarea::{read_vertices, ParseCfg};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod report;

use report::AreaReport;

#[derive(Parser)]
#[command(name = "polyarea", version)]
#[command(about = "Signed area of a polygon given as a CSV list of vertices")]
struct Cmd {
    /// Input file: one `x,y` vertex per line, in traversal order
    input: PathBuf,

    /// Field delimiter (single ASCII character)
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Print a JSON report instead of the text summary
    #[arg(long)]
    json: bool,

    /// Log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cmd = match Cmd::try_parse() {
        Ok(cmd) => cmd,
        Err(e) => {
            // Usage goes to stdout; only --help/--version count as success.
            print!("{e}");
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };
    init_logging(cmd.verbose);
    match run(&cmd) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            println!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cmd: &Cmd) -> Result<()> {
    let cfg = ParseCfg {
        delimiter: delimiter_byte(cmd.delimiter)?,
        ..ParseCfg::default()
    };
    let input = cmd.input.display().to_string();
    tracing::info!(input, delimiter = %cmd.delimiter, json = cmd.json, "run");
    let progress = |msg: &str| {
        if !cmd.json {
            println!("{msg}");
        }
    };

    progress("Reading input file ...");
    let verts = read_vertices(&cmd.input, &cfg)?;
    tracing::debug!(vertices = verts.len(), "parsed");
    progress("Input file read.");

    progress("Calculating area ...");
    let area = verts.signed_area();
    let orientation = polyarea::orientation(area);
    progress("Calculation complete.");
    tracing::info!(area, %orientation, "area");

    let report = AreaReport::new(input, verts.len(), area, orientation);
    if cmd.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}

fn delimiter_byte(c: char) -> Result<u8> {
    if !c.is_ascii() || c == '"' || c == '\n' || c == '\r' {
        bail!("unsupported delimiter {c:?}: expected a single ASCII character other than a quote or newline");
    }
    Ok(c as u8)
}
