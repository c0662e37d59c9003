mod cli;
mod commands;
mod config;
mod logging;

pub use cli::BarArgs;
pub use cli::Cli;
pub use cli::Color;
pub use cli::Command;
pub use cli::HistArgs;
pub use cli::Output;
pub use cli::PipeArgs;
pub use cli::SampleArgs;
pub use cli::SparkArgs;
pub use config::ConfigToml;
pub use logging::init_logging;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let Cli {
        config, command, ..
    } = cli;
    let config = ConfigToml::load(config.as_deref())?;
    match command {
        Command::Pipe(args) => commands::pipe(&config, args),
        Command::Sample(args) => commands::sample(&config, args),
        Command::Hist(args) => commands::hist(&config, args),
        Command::Bar(args) => commands::bar(&config, args),
    }
}
