use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use songbook::app::handler;
use songbook::app::state::SelectionState;
use songbook::app::App;
use songbook::catalog::loader::{self, LoadOutcome};
use songbook::catalog::{watcher, CatalogSource};
use songbook::config::{Args, Config, FileConfig};
use songbook::event::{input, Event};
use songbook::ui::Ui;

fn main() -> Result<()> {
    let args = Args::parse();
    let config_path = Config::config_path(&args);
    let (file_config, config_error) = match FileConfig::read(&config_path) {
        Ok(file) => (file.unwrap_or_default(), None),
        Err(e) => (FileConfig::default(), Some(e)),
    };
    let config = Config::resolve(&args, &file_config);

    init_logging(&config)?;
    if let Some(e) = config_error {
        warn!(error = %format!("{:#}", e), "ignoring config file");
    }
    info!(catalog = %config.catalog, slots = config.performer_visible_count, watch = config.watch, "starting songbook");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
    }

    Ok(())
}

fn init_logging(config: &Config) -> Result<()> {
    if let Some(parent) = config.log_file.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("failed to open log file {}", config.log_file.display()))?;

    // The terminal belongs to the UI, so logs only go to the file.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "songbook=info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, config: &Config) -> Result<()> {
    let (event_tx, event_rx) = crossbeam_channel::unbounded();

    let _input_handle = input::spawn_input_thread(event_tx.clone());

    // One-shot catalog load; the result arrives as an event
    let load_tx = event_tx.clone();
    let _load_handle = loader::spawn_load(config.catalog.clone(), move |outcome| {
        let _ = load_tx.send(Event::CatalogLoaded(outcome));
    });

    let _watcher = match (&config.catalog, config.watch) {
        (CatalogSource::File(path), true) => {
            let reload_tx = event_tx.clone();
            watcher::spawn_watcher(path, move |outcome: LoadOutcome| {
                let _ = reload_tx.send(Event::CatalogLoaded(outcome));
            })
        }
        (CatalogSource::Url(_), true) => {
            warn!("--watch only applies to catalog files");
            None
        }
        _ => None,
    };

    let mut app = App::new(SelectionState::with_visible_count(config.performer_visible_count));
    let mut ui = Ui::new();

    terminal.draw(|frame| ui.render(frame, &app))?;

    loop {
        match event_rx.recv_timeout(Duration::from_millis(250)) {
            Ok(Event::Key(key)) => {
                for action in handler::handle_key_event(key, &app, &mut ui) {
                    app.handle_action(action);
                }
                if app.should_quit {
                    break;
                }
            }
            Ok(Event::Resize(_, _)) => {} // Will re-render below
            Ok(Event::CatalogLoaded(outcome)) => {
                app.on_catalog_loaded(outcome);
                ui.reset_cursors();
            }
            Err(crossbeam_channel::RecvTimeoutError::Timeout) => continue,
            Err(crossbeam_channel::RecvTimeoutError::Disconnected) => break,
        }

        terminal.draw(|frame| ui.render(frame, &app))?;
    }

    info!("songbook exiting");
    Ok(())
}
