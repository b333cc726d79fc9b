// ============================================================================
// Crypto Coaster - Point d'entrée
// ============================================================================
// Programme TUI : carte du prix BTC/USD rafraîchie toutes les 60 secondes
//
// CONCEPTS RUST CLÉS :
// 1. Terminal raw mode : contrôle total du terminal
// 2. Event loop : render -> input -> update
// 3. Runtime tokio : le timer et les polls tournent sur les workers du
//    runtime pendant que la boucle TUI reste synchrone
// ============================================================================

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, error, info};

use cryptocoaster::api::CoinGeckoClient;
use cryptocoaster::app::App;
use cryptocoaster::config::{Config, APP_NAME};
use cryptocoaster::ui::events::{is_quit_event, is_refresh_event, Event, EventHandler};
use cryptocoaster::ui::render;
use cryptocoaster::widget::PriceWidget;

// ============================================================================
// Initialisation du logging
// ============================================================================
// Le TUI occupe stdout : les logs vont dans un fichier avec rotation
// quotidienne
//
//   tail -f ~/.local/share/cryptocoaster/logs/cryptocoaster.log
//   RUST_LOG=cryptocoaster=trace cargo run
// ============================================================================

fn init_logging(config: &Config) -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    std::fs::create_dir_all(&config.log_dir)
        .context("Échec de la création du répertoire de logs")?;

    let file_appender = RollingFileAppender::new(
        Rotation::DAILY,
        config.log_dir.clone(),
        format!("{}.log", APP_NAME),
    );

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true)
                .with_line_number(true),
        )
        .with(
            // Par défaut : debug pour cryptocoaster, info pour les dépendances
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cryptocoaster=debug,info".into()),
        )
        .try_init()
        .context("Échec de l'initialisation du subscriber tracing")?;

    info!(log_dir = ?config.log_dir, "Logging initialisé");
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::default();

    // Logging avant tout le reste ; en cas d'échec on continue sans logs
    init_logging(&config).unwrap_or_else(|e| {
        eprintln!("Warning: Failed to initialize logging: {:#}", e);
        eprintln!("   Continuing without logging...");
    });

    info!(endpoint = %config.endpoint, "Crypto Coaster starting up");

    // Le runtime exécute le timer et les polls ; enter() permet à
    // PriceWidget::mount() d'appeler tokio::spawn depuis la boucle synchrone
    let runtime =
        tokio::runtime::Runtime::new().context("Échec de la création du runtime tokio")?;
    let _guard = runtime.enter();

    let source = CoinGeckoClient::new(&config)?;
    let widget = PriceWidget::with_interval(Arc::new(source), config.poll_interval);
    let mut app = App::new(widget);

    debug!("Setting up terminal");
    let mut terminal = setup_terminal()?;

    app.start();

    let events = EventHandler::new();
    info!("Starting event loop");
    let result = run(&mut terminal, &mut app, &events);

    // Démonte le widget même si la boucle a échoué
    app.quit();

    // Restaure le terminal (même en cas d'erreur)
    debug!("Restoring terminal");
    restore_terminal(&mut terminal)?;

    match &result {
        Ok(_) => info!("Application exited normally"),
        Err(e) => error!(error = ?e, "Application exited with error"),
    }

    result
}

// ============================================================================
// Event Loop Principal
// ============================================================================

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    while app.is_running() {
        // 1. RENDER : l'état peut avoir changé en arrière-plan
        terminal.draw(|frame| render(frame, app))?;

        // 2. INPUT
        let event = events.next()?;
        handle_event(app, &event);
    }

    Ok(())
}

fn handle_event(app: &mut App, event: &Event) {
    match event {
        Event::Key(_) if is_quit_event(event) => {
            info!("User requested quit");
            app.quit();
        }
        Event::Key(_) if is_refresh_event(event) => app.refresh(),
        Event::Key(_) | Event::Tick => {}
    }
}

// ============================================================================
// Setup et restauration du terminal
// ============================================================================

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Échec de l'activation du raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| e.into())
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
