use clap::Parser;

mod cmd;

use cmd::{Cli, Commands};

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let res = match &cli.command {
        Commands::Simulate(a) => a.run(),
        Commands::Show(a) => a.run(),
        Commands::Sort(a) => a.run(),
        Commands::Generate(a) => a.run(),
        Commands::Logs(a) => a.run(),
    };
    if let Err(err) = res {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
