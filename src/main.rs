mod app;
mod catalog;
mod config;
mod error;
mod input;
mod loader;
mod messages;
mod recipe;
mod ui;

use app::{App, Effect};
use clap::Parser;
use config::Config;
use crossterm::event::{self, Event, KeyEventKind};
use loader::RecipeSource;
use messages::{CatalogChannels, CatalogMessage};
use ratatui::{Terminal, backend::Backend};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// TUI browser for recipe collections stored as JSON
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// URL or path of the recipe collection loaded at startup
    #[arg(short, long)]
    source: Option<String>,

    /// Directory exports are written to
    #[arg(short, long)]
    export_dir: Option<PathBuf>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file (defaults to the platform data directory)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Route tracing output to a file; the terminal belongs to the UI.
fn init_logging(path: &Path, level: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .try_init()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load configuration: {}", e);
            Config::default()
        }
    };
    if let Some(source) = cli.source {
        config.source = source;
    }
    if let Some(dir) = cli.export_dir {
        config.export_dir = Some(dir);
    }

    match cli.log_file.or_else(Config::default_log_path) {
        Some(path) => {
            if let Err(e) = init_logging(&path, &config.log_level) {
                eprintln!("Warning: Logging disabled ({}): {}", path.display(), e);
            }
        }
        None => eprintln!("Warning: Could not determine log directory, logging disabled"),
    }
    tracing::info!(source = %config.source, "starting recipe browser");

    let channels = CatalogChannels::new();
    let mut app = App::new(config.resolved_export_dir());

    loader::spawn_load(
        RecipeSource::parse(&config.source),
        Duration::from_secs(config.request_timeout_secs),
        channels.tx.clone(),
    );

    // Init terminal
    let mut terminal = ratatui::init();

    let result = run_app(&mut terminal, &mut app, &channels.rx, &channels.tx).await;

    // Restore terminal
    ratatui::restore();

    if let Err(e) = result {
        tracing::error!(error = %e, "event loop failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: &Receiver<CatalogMessage>,
    tx: &Sender<CatalogMessage>,
) -> Result<(), Box<dyn std::error::Error>>
where
    B: Backend,
    B::Error: 'static,
{
    let size = terminal.size()?;
    app.update_layout(size.width, size.height);

    loop {
        while let Ok(message) = rx.try_recv() {
            app.apply_message(message);
        }

        terminal.draw(|frame| ui::render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        // Short poll so finished loads show up promptly
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if let Some(action) = input::action_for_key(app, key) {
                        match app.dispatch(action) {
                            Some(Effect::Import(path)) => loader::spawn_import(path, tx.clone()),
                            None => {}
                        }
                    }
                }
                Event::Resize(width, height) => {
                    app.update_layout(width, height);
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app::{CARD_MIN_WIDTH, GRID_OVERHEAD};
    use ratatui::backend::TestBackend;

    #[test]
    fn test_init_logging_writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("recipe-browser.log");

        init_logging(&path, "info").unwrap();
        tracing::info!("logging ready");

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("logging ready"));
    }

    #[tokio::test]
    async fn test_run_app_sizes_grid_before_first_frame() {
        let mut terminal = Terminal::new(TestBackend::new(CARD_MIN_WIDTH * 3, GRID_OVERHEAD + 16)).unwrap();
        let channels = CatalogChannels::new();
        let mut app = App::new(PathBuf::from("."));
        app.should_quit = true;

        run_app(&mut terminal, &mut app, &channels.rx, &channels.tx)
            .await
            .unwrap();

        assert_eq!(app.grid_columns, 3);
        assert_eq!(app.grid_rows, 2);
    }
}
