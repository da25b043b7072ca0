use color_eyre::eyre::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::{
    io::{self, IsTerminal},
    sync::Arc,
    time::Duration,
};
use tgcloud_app::App;
use tgcloud_config::{HostContext, Settings};
use tgcloud_core::HttpStorageApi;
use tokio::sync::RwLock;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Install error hooks
    color_eyre::install()?;

    setup_logging()?;

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        return Err(e);
    }

    Ok(())
}

fn setup_logging() -> Result<()> {
    use std::env;

    let log_dir = env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;
    let log_path = log_dir.join("tgcloud.log");

    eprintln!("Logging to: {}", log_path.display());

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tgcloud=debug,info"));

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_thread_ids(false)
        .init();

    info!("Starting tgcloud...");
    info!("Log file: {}", log_path.display());

    Ok(())
}

async fn run() -> Result<()> {
    if !std::io::stdout().is_terminal() {
        eprintln!("Error: This application must be run in a terminal");
        std::process::exit(1);
    }

    let settings = Settings::load().await?;
    let host = HostContext::from(&settings);
    info!(
        "Launch params: platform={:?} version={:?} start_param={:?}",
        host.launch.platform, host.launch.version, host.launch.start_param
    );

    let api = Arc::new(HttpStorageApi::from_settings(&settings)?);
    info!("Backend: {}", api.base_url());
    let app = Arc::new(RwLock::new(App::new(api, host)));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("Runtime error: {:?}", err);
        return Err(err);
    }

    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: Arc<RwLock<App>>) -> Result<()> {
    // Show the loading screen while the bootstrap requests are in flight
    {
        let mut app = app.write().await;
        terminal.draw(|f| tgcloud_ui::draw(f, &app))?;
        app.bootstrap().await;
    }

    let tick_rate = Duration::from_millis(100);

    loop {
        {
            let app = app.read().await;
            terminal.draw(|f| tgcloud_ui::draw(f, &app))?;
        }

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let mut app = app.write().await;

                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(event::KeyModifiers::CONTROL) => {
                            info!("User forced quit");
                            return Ok(());
                        }
                        _ => {
                            app.on_key(key).await?;
                            if app.should_quit {
                                info!("User requested quit");
                                return Ok(());
                            }
                        }
                    }
                }
            }
        }
    }
}
