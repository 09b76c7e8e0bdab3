// ABOUTME: Main entry point for the Macromind terminal fitness tracker
//
// Binary: macromind
// Usage: macromind [COMMAND]
// - No command: launches the TUI
// - fixtures: print the mock datasets as JSON

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use macromind::app::{AppEvent, AppState, EventHandler};
use macromind::cli::{self, Cli, Commands};
use macromind::components::LayoutComponent;
use macromind::config::AppConfig;
use macromind::fixtures::Fixtures;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, IsTerminal},
    time::{Duration, Instant},
};

/// Terminal cleanup utility used from the panic hook and error paths.
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

fn cleanup_terminal_with_instance(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let result = match args.command {
        Some(Commands::Fixtures) => cli::print_fixtures(),
        Some(Commands::Tui) | None => {
            let mut config = AppConfig::load().context("failed to load configuration")?;
            if let Some(tick_rate) = args.tick_rate {
                config.tick_rate_ms = tick_rate;
            }
            setup_logging(&config)?;
            setup_panic_handler();

            let mut state = AppState::new(Fixtures::new());
            let mut layout = LayoutComponent::new();
            run_tui(&mut state, &mut layout, &config).await
        }
    };

    if result.is_err() {
        cleanup_terminal();
    }
    result
}

async fn run_tui(
    state: &mut AppState,
    layout: &mut LayoutComponent,
    config: &AppConfig,
) -> Result<()> {
    if !IsTerminal::is_terminal(&io::stdout()) {
        anyhow::bail!(
            "No TTY detected. This application requires a terminal.\n\
             Try running directly in a terminal instead of redirecting output."
        );
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_tui_loop(state, layout, &mut terminal, config).await;

    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        tracing::error!("Failed to cleanup terminal: {}", e);
        cleanup_terminal();
    }

    result
}

async fn run_tui_loop(
    state: &mut AppState,
    layout: &mut LayoutComponent,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &AppConfig,
) -> Result<()> {
    let tick_rate = Duration::from_millis(config.tick_rate_ms.max(10));
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            layout.render(frame, state);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if crossterm::event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                // Ignore repeats and release events on platforms that report them.
                if key_event.kind == KeyEventKind::Press {
                    if let Some(app_event) = EventHandler::handle_key_event(key_event, state) {
                        match app_event {
                            // Transcript scroll lives in the component, not AppState.
                            AppEvent::ScrollCoachUp => layout.coach_mut().scroll_up(),
                            AppEvent::ScrollCoachDown => {
                                let total = state.coach.messages.len();
                                layout.coach_mut().scroll_down(total);
                            }
                            other => {
                                EventHandler::process_event(other, state, Instant::now());
                            }
                        }
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            state.tick(Instant::now());
            last_tick = Instant::now();
        }

        if state.should_quit {
            return Ok(());
        }
    }
}

fn setup_logging(config: &AppConfig) -> Result<()> {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    let log_dir = AppConfig::data_dir()
        .map(|dir| dir.join("logs"))
        .unwrap_or_else(|| std::path::PathBuf::from(".macromind/logs"));
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let log_file = log_dir.join(format!(
        "macromind-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("failed to open log file {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .init();
    Ok(())
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        // Restore the terminal before the panic message hits stderr.
        cleanup_terminal();
        tracing::error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
    }));
}
