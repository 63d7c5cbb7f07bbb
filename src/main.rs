//! pqcat - inspect and filter Parquet files from the command line

use anyhow::Result;
use clap::{Args as ClapArgs, Parser as ClapParser, Subcommand};
use pqcat::inspect::{inspect, parse_columns, InspectRequest, RowWindow};
use pqcat::output::{render, OutputFormat};
use pqcat::predicate::FilterError;
use std::path::PathBuf;
use std::process::ExitCode;

/// pqcat - Fast CLI tool for inspecting and filtering Parquet files
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the first rows of a file
    Head {
        #[command(flatten)]
        common: CommonArgs,

        /// Number of rows to show
        #[arg(short, long, default_value = "10")]
        num: usize,
    },

    /// Show the last rows of a file
    Tail {
        #[command(flatten)]
        common: CommonArgs,

        /// Number of rows to show
        #[arg(short, long, default_value = "10")]
        num: usize,
    },

    /// Show every row of a file
    #[command(visible_alias = "cat")]
    Show {
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(ClapArgs, Debug)]
struct CommonArgs {
    /// Parquet file to read
    file: PathBuf,

    /// Comma-separated list of columns to show
    #[arg(long)]
    columns: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Filter condition such as "age>30" (repeatable, all must match)
    #[arg(short, long = "filter")]
    filters: Vec<String>,
}

impl Command {
    fn into_request(self) -> (InspectRequest, OutputFormat) {
        let (common, window) = match self {
            Command::Head { common, num } => (common, RowWindow::Head(num)),
            Command::Tail { common, num } => (common, RowWindow::Tail(num)),
            Command::Show { common } => (common, RowWindow::All),
        };

        let columns = common
            .columns
            .as_deref()
            .map(parse_columns)
            .unwrap_or_default();
        let request = InspectRequest::new(common.file, window)
            .with_columns(columns)
            .with_conditions(common.filters);
        (request, common.format)
    }
}

fn run(args: Args) -> Result<()> {
    let (request, format) = args.command.into_request();
    log::debug!("{:?}", request);

    let table = inspect(&request)?;
    println!("{}", render(&table, format)?);
    Ok(())
}

fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();

    // Set up logging; stdout carries the data so the default stays quiet
    let log_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<FilterError>() {
                Some(filter_err) => eprintln!("Invalid filter: {}", filter_err),
                None => eprintln!("Error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_arguments() {
        let args = Args::parse_from([
            "pqcat",
            "head",
            "data.parquet",
            "-n",
            "3",
            "--columns",
            "name, age",
            "-f",
            "age>30",
            "--filter",
            "name startswith A",
            "--format",
            "csv",
        ]);
        assert!(!args.debug);

        let (request, format) = args.command.into_request();
        assert_eq!(format, OutputFormat::Csv);
        assert_eq!(request.window, RowWindow::Head(3));
        assert_eq!(request.columns, vec!["name", "age"]);
        assert_eq!(request.conditions, vec!["age>30", "name startswith A"]);
        assert_eq!(request.path, PathBuf::from("data.parquet"));
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["pqcat", "tail", "data.parquet"]);
        let (request, format) = args.command.into_request();
        assert_eq!(format, OutputFormat::Table);
        assert_eq!(request.window, RowWindow::Tail(10));
        assert!(request.columns.is_empty());
        assert!(request.conditions.is_empty());
    }

    #[test]
    fn test_cat_alias_and_global_debug() {
        let args = Args::parse_from(["pqcat", "cat", "data.parquet", "--debug"]);
        assert!(args.debug);
        let (request, _) = args.command.into_request();
        assert_eq!(request.window, RowWindow::All);
    }

    #[test]
    fn test_show_has_no_num() {
        assert!(Args::try_parse_from(["pqcat", "show", "data.parquet", "-n", "3"]).is_err());
    }
}
