use sdprep::app::App;
use sdprep::cli::{parse_args, run_cli_command, CliCommand};
use sdprep::error::SdError;
use sdprep::event_loop::run_app;
use sdprep::logging::init_logging;
use sdprep::startup::{run_preflight_checks, StartupConfig};
use sdprep::terminal::{setup_panic_hook, TerminalManager};

use color_eyre::Result;
use crossterm::event::EventStream;

fn main() -> Result<()> {
    // Handle CLI flags before any terminal setup
    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => exit_with(e.into()),
    };
    if let Some(result) = run_cli_command(&command, &mut std::io::stdout()) {
        if let Err(e) = result {
            exit_with(e);
        }
        return Ok(());
    }
    let CliCommand::RunTui(overrides) = command else {
        return Ok(());
    };

    color_eyre::install()?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let config = match overrides.resolve(StartupConfig::from_env()) {
        Ok(config) => config,
        Err(e) => exit_with(e.into()),
    };
    if let Err(e) = init_logging(config.log_file.as_deref()) {
        exit_with(e);
    }

    let startup = match run_preflight_checks(config) {
        Ok(startup) => startup,
        Err(e) => exit_with(e),
    };

    // Single-threaded: the only async work is waiting on terminal events
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut app = App::from_config(startup.store, &startup.config);
    let mut term_manager = TerminalManager::new(startup.config.mouse)?;

    tracing::info!(version = sdprep::cli::VERSION, "sdprep started");
    let result = runtime.block_on(run_app(term_manager.terminal(), &mut app, EventStream::new()));

    // Restore terminal
    term_manager.restore();
    tracing::info!("sdprep stopped");

    result
}

/// Report a process-level failure and exit with its category's code.
fn exit_with(err: SdError) -> ! {
    tracing::error!(code = err.error_code(), "{}", err);
    eprintln!("sdprep: {}", err.user_message());
    std::process::exit(err.category().exit_code())
}
