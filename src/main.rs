use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use mgraph::{Dialect, Error};

#[derive(Parser)]
#[command(name = "mgraph", about = "Convert Mermaid diagram text into a node/edge graph (JSON)")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    file: Option<PathBuf>,

    /// Force a dialect instead of detecting it: flow, sequence, gantt, class, state
    #[arg(long, short = 'd', value_parser = parse_dialect)]
    dialect: Option<Dialect>,

    /// Pretty-print the JSON output
    #[arg(long, short = 'p')]
    pretty: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    quiet: bool,
}

fn parse_dialect(s: &str) -> Result<Dialect, Error> {
    s.parse()
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("ERROR: {e}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String, Error> {
    let input = read_input(cli.file.as_ref())?;
    let graph = match cli.dialect {
        Some(dialect) => mgraph::parse_as(&input, dialect),
        None => mgraph::parse(&input),
    };
    graph.to_json(cli.pretty)
}

fn read_input(file: Option<&PathBuf>) -> Result<String, Error> {
    match file {
        Some(path) => std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        }),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(Error::Stdin)?;
            Ok(buf)
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}
