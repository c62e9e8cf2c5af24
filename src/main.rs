extern crate clap;
extern crate divider_calc;
extern crate tracing_subscriber;

use std::process::ExitCode;

use clap::Parser;
use divider_calc::*;
use tracing_subscriber::EnvFilter;

/// Pick E24 resistors for a voltage divider
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input voltage in volts
    #[arg(value_name = "V_IN", allow_negative_numbers = true)]
    v_in: f64,

    /// Desired output voltage in volts
    #[arg(value_name = "V_OUT", allow_negative_numbers = true)]
    v_out: f64,

    /// Smallest bottom resistor to consider, in ohms
    #[arg(long, default_value_t = SolverConfig::default().r2_min)]
    r2_min: f64,

    /// Largest bottom resistor to consider, in ohms
    #[arg(long, default_value_t = SolverConfig::default().r2_max)]
    r2_max: f64,

    /// Log more (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    let divider = Divider::new(SolverConfig {
        r2_min: args.r2_min,
        r2_max: args.r2_max,
    });

    println!("Number of combinations: {}", divider.combinations());

    match divider.solve(args.v_in, args.v_out) {
        Ok(pair) => {
            println!("{:#}", pair);
            println!();
            println!("{}", pair.message);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
