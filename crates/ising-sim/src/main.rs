use clap::{Parser, Subcommand};

use commands::run::RunArgs;
use commands::version::VersionArgs;

mod commands;
mod render;

#[derive(Parser, Debug)]
#[command(name = "ising-sim", about = "2D Ising Metropolis sampler CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Execute a sampler run and write the lattice image and energy trace.
    Run(RunArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Run(args) => commands::run::run(&args),
        Command::Version(args) => commands::version::run(&args),
    };
    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
