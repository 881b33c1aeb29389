use clap::{Parser, Subcommand};
use splice_drum::codec::DecodeOptions;
use splice_drum::file::{
    ExportFormat, FileError, export_pattern, import_pattern, load_pattern_with_options,
    save_pattern, scan_directory,
};
use std::path::PathBuf;

/// Inspect and convert .splice drum machine patterns
#[derive(Parser, Debug)]
#[command(name = "splice-drum", version, about)]
struct Cli {
    /// Reject step bytes other than 0/1 and text that is not UTF-8
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a pattern as a step grid
    Show { path: PathBuf },

    /// Print a pattern as JSON or RON
    Export {
        path: PathBuf,
        #[arg(long, default_value = "json", value_parser = parse_format)]
        format: ExportFormat,
    },

    /// Encode a JSON or RON export into a .splice file
    Import {
        input: PathBuf,
        output: PathBuf,
        #[arg(long, default_value = "json", value_parser = parse_format)]
        format: ExportFormat,
    },

    /// Print every pattern found under a directory
    Scan { dir: PathBuf },
}

/// Parse `--format` through `ExportFormat`'s `FromStr`
fn parse_format(s: &str) -> Result<ExportFormat, String> {
    s.parse::<ExportFormat>().map_err(|e| e.to_string())
}

fn run(cli: Cli) -> Result<(), FileError> {
    let options = if cli.strict {
        DecodeOptions::strict()
    } else {
        DecodeOptions::default()
    };

    match cli.command {
        Command::Show { path } => {
            let pattern = load_pattern_with_options(&path, &options)?;
            print!("{}", pattern);
        }
        Command::Export { path, format } => {
            let pattern = load_pattern_with_options(&path, &options)?;
            println!("{}", export_pattern(&pattern, format)?);
        }
        Command::Import {
            input,
            output,
            format,
        } => {
            let text = std::fs::read_to_string(&input)?;
            let pattern = import_pattern(&text, format)?;
            save_pattern(&pattern, &output)?;
            println!(
                "Wrote {} ({} tracks)",
                output.display(),
                pattern.tracks.len()
            );
        }
        Command::Scan { dir } => {
            for (path, pattern) in scan_directory(&dir, &options)? {
                println!("== {}", path.display());
                println!("{}", pattern);
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}
