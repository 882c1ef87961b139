use clap::Parser;
use dcf_valuation::cli::{Cli, Commands};
use dcf_valuation::config::{Config, ConfigSource};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration; only a missing file falls back to the example
    let (config, source) = Config::load_or_example(&cli.config)?;
    if source == ConfigSource::BuiltInExample {
        eprintln!("Warning: No config file at {}", cli.config);
        eprintln!("Using built-in example configuration");
    }

    // Initialize telemetry
    dcf_valuation::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Value(args) => {
            args.execute(&config.valuation)?;
        }
        Commands::Demo(args) => {
            args.execute()?;
        }
        Commands::Config => {
            println!("Current configuration:");
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
