// ABOUTME: Main entry point for the stepup onboarding demo
//
// Binary: stepup
// Usage: stepup [--config PATH] [--initial-index N] [--collapsed-fraction F] [COMMAND]
// - No command / run: launches the TUI
// - show-config: prints the resolved configuration

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, prelude::*};
use std::{
    io::{self, IsTerminal},
    time::{Duration, Instant},
};

use stepup::app::{App, EventHandler};
use stepup::components::{LayoutComponent, onboarding_pages};
use stepup::config::StepupConfig;

mod cli;

/// Redraw interval while idle
const IDLE_TICK: Duration = Duration::from_millis(250);
/// Redraw interval while a transition is in flight
const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

fn cleanup_terminal_with_instance<B: Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let config = match &args.config {
        Some(path) => StepupConfig::load_from(path)?,
        None => StepupConfig::load()?,
    };
    let config = args.apply_overrides(config);

    if args.command == Some(cli::Commands::ShowConfig) {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    if let Err(e) = setup_logging(&config) {
        eprintln!("Logging disabled: {e:#}");
    }
    setup_panic_handler();

    let mut app = App::new(onboarding_pages(), &config).context("Invalid stepper configuration")?;
    let mut layout = LayoutComponent::new();

    let result = run_tui(&mut app, &mut layout);

    if result.is_err() {
        cleanup_terminal();
    }

    result
}

fn run_tui(app: &mut App, layout: &mut LayoutComponent) -> Result<()> {
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. This application requires a terminal.\n\
             Try running directly in a terminal instead of redirecting output."
        ));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_tui_loop(app, layout, &mut terminal);

    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        tracing::error!("Failed to cleanup terminal: {}", e);
        cleanup_terminal();
    }

    result
}

fn run_tui_loop(
    app: &mut App,
    layout: &mut LayoutComponent,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            layout.render(frame, &mut app.state);
        })?;

        if app.state.should_quit {
            break;
        }

        let timeout = if app.state.stepper.is_animating(Instant::now()) {
            ANIMATION_TICK
        } else {
            IDLE_TICK
        };

        if !event::poll(timeout)? {
            continue;
        }

        let app_event = match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                EventHandler::handle_key_event(key_event, &mut app.state)
            }
            Event::Mouse(mouse_event) => EventHandler::handle_mouse_event(mouse_event, &mut app.state),
            Event::Resize(width, height) => {
                tracing::debug!(width, height, "Terminal resized");
                None
            }
            _ => None,
        };

        if let Some(app_event) = app_event {
            EventHandler::process_event(app_event, &mut app.state);
        }
    }

    Ok(())
}

fn setup_logging(config: &StepupConfig) -> Result<()> {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    let log_dir = dirs::data_local_dir()
        .context("Could not determine data directory")?
        .join("stepup")
        .join("logs");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    // JSONL file per run; the TUI owns the terminal so nothing goes to stderr
    let log_file = log_dir.join(format!(
        "stepup-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Failed to create log file: {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.as_str().into()),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Restore the terminal before anything is printed
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
