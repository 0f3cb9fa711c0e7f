use agent_duel::{App, Config};
use anyhow::Result;
use directories::ProjectDirs;
use ratatui::crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use ratatui::crossterm::execute;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "agent-duel", "agent-duel")
}

fn get_config_path() -> PathBuf {
    if let Some(proj_dirs) = project_dirs() {
        proj_dirs.config_dir().join("config.toml")
    } else {
        PathBuf::from("config/default.toml")
    }
}

/// Stdout belongs to the terminal UI, so logs go to a file in the data dir.
fn init_logging() -> Result<PathBuf> {
    let dir = project_dirs()
        .map(|d| d.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&dir)?;
    let path = dir.join("agent-duel.log");
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();

    Ok(path)
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let log_path = init_logging();

    let config = Config::load_or_default(&get_config_path())
        .with_env_overrides(|name| std::env::var(name).ok());

    let rt = tokio::runtime::Runtime::new()?;
    let _guard = rt.enter();

    let mut terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture, EnableBracketedPaste)?;

    let result = run(&mut terminal, config);

    let _ = execute!(io::stdout(), DisableBracketedPaste, DisableMouseCapture);
    ratatui::restore();

    if let Err(ref e) = log_path {
        eprintln!("Logging disabled: {}", e);
    }
    result
}

fn run(terminal: &mut ratatui::DefaultTerminal, config: Config) -> Result<()> {
    let tick = config.ui.tick();
    tracing::info!(
        "Starting agent-duel against {} (client credential: {})",
        config.backend.base_url,
        config.backend.requires_client_credential
    );

    let mut app = App::new(config);
    app.start_background_probes();

    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(tick)? {
            let event = event::read()?;
            match app.handle_event(event) {
                Ok(true) => break,
                Ok(false) => {}
                Err(e) => tracing::warn!("Event handling failed: {}", e),
            }
        }

        app.process_async_events();

        if app.should_quit {
            break;
        }
    }

    tracing::info!("Shutting down");
    Ok(())
}
