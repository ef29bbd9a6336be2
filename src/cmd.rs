//! Command line interface

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use trisim::io::{
    format_values, read_circuit_file, read_input_file, read_rule_log_file, rule_log,
    write_circuit_file, write_values_file,
};
use trisim::log::targets;
use trisim::network::generators::random_inputs;
use trisim::sim::{dependency_order, resolve_with, Config, Strategy};

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Command line arguments
#[derive(Subcommand)]
pub enum Commands {
    /// Simulate a circuit
    ///
    /// Prints the value of every gate output, in the order the gates are declared:
    ///    out1 = [1, 0, X]
    ///    out2 = [X, 1, 1]
    #[clap(alias = "sim")]
    Simulate(SimulateArgs),

    /// Show statistics about a circuit
    ///
    /// Will print statistics on the number of inputs and gates, and the logic depth.
    #[clap()]
    Show(ShowArgs),

    /// Reorder the gates of a circuit
    ///
    /// Every gate is written after the gates it reads. Fails if the circuit has a cycle.
    #[clap()]
    Sort(SortArgs),

    /// Generate random input values for a circuit
    #[clap(alias = "gen")]
    Generate(GenerateArgs),

    /// Count errors per rule in a log file
    #[clap()]
    Logs(LogsArgs),
}

/// Command arguments for simulation
#[derive(Args)]
pub struct SimulateArgs {
    /// Input values
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Circuit to simulate
    #[arg(default_value = "circuit.txt")]
    circuit: PathBuf,

    /// Order in which gates are resolved
    #[arg(long, value_enum, default_value_t = Strategy::Scan)]
    strategy: Strategy,

    /// Output file for the values; printed to stdout if omitted
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
}

impl SimulateArgs {
    pub fn run(&self) -> Result<()> {
        let inputs = read_input_file(&self.input)
            .with_context(|| format!("reading inputs from {}", self.input.display()))?;
        let circuit = read_circuit_file(&self.circuit)
            .with_context(|| format!("reading circuit from {}", self.circuit.display()))?;
        let config = Config {
            strategy: self.strategy,
        };
        let values = resolve_with(&inputs, &circuit, &config).context("simulation failed")?;
        match &self.output {
            Some(path) => write_values_file(path, &values)
                .with_context(|| format!("writing values to {}", path.display()))?,
            None => println!("{}", format_values(&values)),
        }
        Ok(())
    }
}

/// Command arguments for circuit informations
#[derive(Args)]
pub struct ShowArgs {
    /// Circuit to show
    file: PathBuf,
}

impl ShowArgs {
    pub fn run(&self) -> Result<()> {
        use trisim::network::stats::stats;
        let circuit = read_circuit_file(&self.file)
            .with_context(|| format!("reading circuit from {}", self.file.display()))?;
        print!("{}", stats(&circuit));
        Ok(())
    }
}

/// Command arguments for sorting
#[derive(Args)]
pub struct SortArgs {
    /// Circuit to sort
    file: PathBuf,

    /// Output file for the sorted circuit
    #[arg(short = 'o', long)]
    output: PathBuf,
}

impl SortArgs {
    pub fn run(&self) -> Result<()> {
        let circuit = read_circuit_file(&self.file)
            .with_context(|| format!("reading circuit from {}", self.file.display()))?;
        let order = dependency_order(&circuit).context("cannot sort the circuit")?;
        let sorted = circuit.reordered(&order);
        write_circuit_file(&self.output, &sorted)
            .with_context(|| format!("writing circuit to {}", self.output.display()))?;
        Ok(())
    }
}

/// Command arguments for input generation
#[derive(Args)]
pub struct GenerateArgs {
    /// Circuit to generate inputs for
    file: PathBuf,

    /// Output file for the input values
    #[arg(short = 'o', long)]
    output: PathBuf,

    /// Number of bits per input
    #[arg(short = 'w', long, default_value_t = 8)]
    width: usize,

    /// Probability for each bit to be unknown, between 0 and 1
    #[arg(long, default_value_t = 0.0, value_parser = parse_ratio)]
    unknown: f64,

    /// Random seed for generation
    #[arg(long, default_value_t = 1)]
    seed: u64,
}

/// Parse a probability, rejecting NaN and values outside [0, 1]
fn parse_ratio(s: &str) -> Result<f64, String> {
    let p: f64 = s.trim().parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(format!("{s} is not between 0 and 1"))
    }
}

impl GenerateArgs {
    pub fn run(&self) -> Result<()> {
        let circuit = read_circuit_file(&self.file)
            .with_context(|| format!("reading circuit from {}", self.file.display()))?;
        let values = random_inputs(&circuit, self.width, self.unknown, self.seed);
        log::info!(
            target: targets::GENERATE,
            "Generated {} inputs of {} bits",
            values.len(),
            self.width
        );
        write_values_file(&self.output, &values)
            .with_context(|| format!("writing inputs to {}", self.output.display()))?;
        Ok(())
    }
}

/// Command arguments for log analysis
#[derive(Args)]
pub struct LogsArgs {
    /// Log file to analyze
    file: PathBuf,
}

impl LogsArgs {
    pub fn run(&self) -> Result<()> {
        let counts = read_rule_log_file(&self.file)
            .with_context(|| format!("reading log from {}", self.file.display()))?;
        println!("{}", rule_log::format_rule_errors(&counts));
        Ok(())
    }
}
