use clap::Parser;
use recipe_matcher::{cli, cli::Cli, Result, Settings};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    // Logs go to stderr; stdout carries results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Cli::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = cli::report(&mut io::stderr(), &e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(args: Cli) -> Result<()> {
    // Command-line values win over the environment
    let mut settings = Settings::from_env_with_overrides(args.catalog, args.format)?;
    settings.output.color = io::stdout().is_terminal();
    settings.validate()?;
    debug!("Using settings: {:?}", settings);

    let stdin = io::stdin();
    let stdout = io::stdout();

    cli::run(
        args.command.unwrap_or_default(),
        &settings,
        &mut stdin.lock(),
        &mut stdout.lock(),
        &mut io::stderr(),
    )
}
