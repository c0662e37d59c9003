use clap::Parser;
use uniplot_cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    uniplot_cli::init_logging(cli.color);
    uniplot_cli::run(cli)
}
