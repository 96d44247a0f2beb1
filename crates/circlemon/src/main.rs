mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "circlemon",
    version,
    about = "A desktop widget showing live CPU and RAM usage as ring gauges"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the widget in this process (default)
    Run,
    /// Launch the widget detached from this terminal
    Start,
    /// Create the default configuration file
    Init,
    /// Print CPU and RAM usage samples, one per second
    Sample(commands::sample::SampleArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => commands::run::execute(),
        Commands::Start => commands::start::execute(),
        Commands::Init => commands::init::execute(),
        Commands::Sample(args) => commands::sample::execute(&args),
    }
}
