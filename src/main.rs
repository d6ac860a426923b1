use clap::{Parser, Subcommand};
use ipv4_subnet_calc::config::{init_logging, Config};
use ipv4_subnet_calc::dispatch::{dispatch, parse_request_line, Action};
use ipv4_subnet_calc::output::{render, Format};
use std::error::Error;
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "ipv4-subnet-calc")]
#[command(about = "Convert IPv4 octets between decimal and binary, and expand CIDR ranges.")]
struct CommandLine {
    /// Output format: text or json (default from IPCALC_FORMAT)
    #[arg(long, global = true)]
    format: Option<Format>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dotted decimal to dotted binary, e.g. 192.168.1.1
    #[command(alias = "d")]
    Decimal { input: String },
    /// Dotted binary to dotted decimal
    #[command(alias = "b")]
    Binary { input: String },
    /// Network, broadcast and host range of a CIDR, e.g. 192.168.1.0/24
    #[command(alias = "c")]
    Cidr { input: String },
    /// Read "<action> <input>" lines from stdin
    #[command(alias = "i")]
    Interactive,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let commands = CommandLine::parse();
    let config = Config::from_env(commands.format)?;
    init_logging(&config.log_config)?;
    let format = config.format;
    log::info!("#Start main() format={format}");

    match commands.command {
        Commands::Decimal { input } => run_one(Action::Decimal, &input, format),
        Commands::Binary { input } => run_one(Action::Binary, &input, format),
        Commands::Cidr { input } => run_one(Action::Cidr, &input, format),
        Commands::Interactive => run_interactive(format),
    }
}

fn run_one(action: Action, input: &str, format: Format) -> Result<(), Box<dyn Error>> {
    match dispatch(action, input) {
        Some(outcome) => println!("{}", render(&outcome, format)?),
        None => log::warn!("No {action} input given, nothing to do"),
    }
    Ok(())
}

fn run_interactive(format: Format) -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let (action, input) = match parse_request_line(&line) {
            Ok(Some(request)) => request,
            Ok(None) => continue,
            Err(e) => {
                log::warn!("Skipping line {line:?}: {e}");
                continue;
            }
        };
        if let Some(outcome) = dispatch(action, &input) {
            writeln!(out, "{}", render(&outcome, format)?)?;
        }
    }
    Ok(())
}
