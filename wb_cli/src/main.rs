//! # Archer W&B CLI
//!
//! Command line front end for the `wb_core` worksheet.
//!
//! ```text
//! wb_cli compute --set basic.weight=1500 --set basic.arm=85 --format json
//! wb_cli compute --input flight.json --export .
//! wb_cli interactive
//! wb_cli equations
//! wb_cli fields
//! ```
//!
//! Logs go to stderr; `-v` raises verbosity and `RUST_LOG` overrides it.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use chrono::Local;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use wb_core::equations::generate_equations_markdown;
use wb_core::file_io::{export_sheet, load_inputs};
use wb_core::render::render_sheet;
use wb_core::worksheet::{Field, Worksheet, WorksheetInputs, WorksheetResult};
use wb_core::{CalcError, CalcResult};

#[derive(Parser, Debug)]
#[command(name = "wb_cli")]
#[command(version)]
#[command(about = "PA-28 Archer weight & balance and performance worksheet", long_about = None)]
struct Cli {
    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute a worksheet and print it
    Compute {
        /// JSON file of worksheet inputs to start from
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Field edit, applied in order after the input file
        #[arg(short, long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Also export the text sheet into this directory
        #[arg(long, value_name = "DIR")]
        export: Option<PathBuf>,
    },

    /// Edit a worksheet line by line
    Interactive {
        /// JSON file of worksheet inputs to start from
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Directory used by `export` when none is given
        #[arg(long, default_value = ".")]
        export_dir: PathBuf,
    },

    /// Print the equation reference
    Equations,

    /// List every field name
    Fields,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// JSON output of `compute`
#[derive(Serialize)]
struct Report<'a> {
    inputs: &'a WorksheetInputs,
    result: &'a WorksheetResult,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn report_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!("{}", json);
    }
}

fn open_worksheet(input: Option<&Path>) -> CalcResult<Worksheet> {
    match input {
        Some(path) => Ok(Worksheet::from_inputs(load_inputs(path)?)),
        None => Ok(Worksheet::new()),
    }
}

/// Split a `NAME=VALUE` argument. The value may be empty.
fn parse_assignment(arg: &str) -> CalcResult<(&str, &str)> {
    arg.split_once('=')
        .ok_or_else(|| CalcError::invalid_input("--set", arg, "expected NAME=VALUE"))
}

fn export_today(sheet: &Worksheet, dir: &Path) -> CalcResult<PathBuf> {
    let text = render_sheet(sheet.inputs(), sheet.result());
    export_sheet(dir, Local::now().date_naive(), &text)
}

fn print_fields() {
    for field in Field::all() {
        println!("{:<20} {}", field.name(), field.description());
    }
}

fn compute(input: Option<&Path>, set: &[String], format: OutputFormat, export: Option<&Path>) -> CalcResult<()> {
    let mut sheet = open_worksheet(input)?;
    for arg in set {
        let (name, value) = parse_assignment(arg)?;
        sheet.set_named(name, value)?;
    }

    match format {
        OutputFormat::Text => print!("{}", render_sheet(sheet.inputs(), sheet.result())),
        OutputFormat::Json => {
            let report = Report {
                inputs: sheet.inputs(),
                result: sheet.result(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if let Some(dir) = export {
        let path = export_today(&sheet, dir)?;
        eprintln!("Exported {}", path.display());
    }
    Ok(())
}

const INTERACTIVE_HELP: &str = "\
Commands:
  NAME VALUE     set a field (NAME alone blanks it)
  show           print the sheet
  clear          reset every field
  export [DIR]   write the sheet to a dated text file
  fields         list field names
  help           this message
  quit           leave";

fn interactive(input: Option<&Path>, export_dir: &Path) -> CalcResult<()> {
    let mut sheet = open_worksheet(input)?;
    println!("Archer W&B worksheet. Type `help` for commands.");
    print!("{}", render_sheet(sheet.inputs(), sheet.result()));

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout()
            .flush()
            .map_err(|e| CalcError::file_error("flush", "stdout", e.to_string()))?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| CalcError::file_error("read", "stdin", e.to_string()))?;
        if read == 0 {
            break;
        }

        let line = line.trim();
        let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        debug!(command, rest, "interactive command");

        match command {
            "" => {}
            "quit" | "exit" => break,
            "help" => println!("{}", INTERACTIVE_HELP),
            "fields" => print_fields(),
            "show" => print!("{}", render_sheet(sheet.inputs(), sheet.result())),
            "clear" => {
                sheet.clear();
                print!("{}", render_sheet(sheet.inputs(), sheet.result()));
            }
            "export" => {
                let dir = if rest.is_empty() { export_dir } else { Path::new(rest) };
                match export_today(&sheet, dir) {
                    Ok(path) => println!("Exported {}", path.display()),
                    Err(e) => report_error(&e),
                }
            }
            name => match sheet.set_named(name, rest) {
                Ok(()) => print!("{}", render_sheet(sheet.inputs(), sheet.result())),
                Err(e) => report_error(&e),
            },
        }
    }
    Ok(())
}

fn run(cli: Cli) -> CalcResult<()> {
    match cli.command {
        Commands::Compute {
            input,
            set,
            format,
            export,
        } => compute(input.as_deref(), &set, format, export.as_deref()),
        Commands::Interactive { input, export_dir } => interactive(input.as_deref(), &export_dir),
        Commands::Equations => {
            print!("{}", generate_equations_markdown());
            Ok(())
        }
        Commands::Fields => {
            print_fields();
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        report_error(&e);
        process::exit(1);
    }
}
