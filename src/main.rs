use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use digitpow::{is_self_power, power_with, self_powers_in, Base, Strategy};
use eyre::{eyre, Result};
use tracing::info;

/// Self-power number checks and exponentiation by squaring
#[derive(Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute BASE^EXPONENT
    Pow {
        #[arg(allow_negative_numbers = true)]
        base: i64,
        #[arg(allow_negative_numbers = true)]
        exponent: i64,
        #[arg(long, value_enum, default_value_t = StrategyArg::Iterative)]
        strategy: StrategyArg,
    },
    /// Check whether NUMBER is a self-power number
    Check {
        /// Accepts 0x, 0o and 0b prefixes
        #[arg(value_parser = parse_number)]
        number: u64,
        #[arg(long, short, default_value = "10", value_parser = parse_base)]
        base: Base,
    },
    /// List the self-power numbers in [START, END)
    Scan {
        #[arg(value_parser = parse_number)]
        start: u64,
        #[arg(value_parser = parse_number)]
        end: u64,
        #[arg(long, short, default_value = "10", value_parser = parse_base)]
        base: Base,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Recursive,
    Iterative,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Recursive => Strategy::Recursive,
            StrategyArg::Iterative => Strategy::Iterative,
        }
    }
}

fn parse_number(s: &str) -> Result<u64, String> {
    let (digits, radix) = match s.get(..2) {
        Some("0x" | "0X") => (&s[2..], 16),
        Some("0o" | "0O") => (&s[2..], 8),
        Some("0b" | "0B") => (&s[2..], 2),
        _ => (s, 10),
    };

    u64::from_str_radix(digits, radix).map_err(|e| format!("invalid number '{}': {}", s, e))
}

fn parse_base(s: &str) -> Result<Base, String> {
    let base: u64 = s
        .parse()
        .map_err(|e| format!("invalid base '{}': {}", s, e))?;

    Base::new(base).map_err(|e| e.to_string())
}

fn init_tracing() {
    tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.cmd {
        Command::Pow {
            base,
            exponent,
            strategy,
        } => {
            let result = power_with(strategy.into(), base, exponent)?;
            println!("{}", result);
        }
        Command::Check { number, base } => {
            let verdict = is_self_power(number, base);
            info!(number, %base, verdict, "checked");

            if verdict {
                println!("{} is a self-power number in base {}", number, base);
            } else {
                println!("{} is not a self-power number in base {}", number, base);
            }
        }
        Command::Scan { start, end, base } => {
            if start > end {
                return Err(eyre!("empty range: start {} is after end {}", start, end));
            }

            let mut found = 0usize;
            for n in self_powers_in(start..end, base) {
                println!("{}", n);
                found += 1;
            }
            info!(start, end, %base, found, "scan finished");
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
