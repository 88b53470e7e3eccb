use apcalc_calculator::Calculator;
use apcalc_cli::{Cli, tracing_setup};
use clap::Parser;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_setup::init_tracing(cli.verbose, cli.log_format)?;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting apcalc");

    let config = cli.load_config()?;
    let calculator = Calculator::with_config(config);
    let output = cli.execute(&calculator)?;
    println!("{output}");
    Ok(())
}
