// calctty: Four-function calculator with calculation history

use std::io::{self, Write};

use calctty::batch::run_keys;
use calctty::cli::Cli;
use calctty::config::Config;
use calctty::engine::calculator::Calculator;
use calctty::logging::{self, LogTarget};
use calctty::ui::App;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let keymap = match config.keymap() {
        Ok(keymap) => keymap,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Command-line flags win over RUST_LOG and the config file
    let log_file = cli.log_file.as_deref().or(config.log_file.as_deref());
    let target = LogTarget::select(log_file, cli.keys.is_some());
    if let Err(e) = logging::init(cli.log_level.as_deref(), &config.log_level, &target) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Some(keys) = &cli.keys {
        info!(keys = keys.as_str(), "running batch");
        let report = match run_keys(keys, &keymap) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };
        for alert in &report.alerts {
            eprintln!("alert: {}", alert);
        }
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", report)?;
        return Ok(());
    }

    info!("starting calculator UI");

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(Calculator::new(), keymap);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    info!(
        calculations = app.calculator.history().len(),
        "calculator closed"
    );

    Ok(())
}
