use coinpage::adapters::{CoinLoreSource, ReqwestHttpClient};
use coinpage::app::App;
use coinpage::cli::{parse_args, print_page, run_cli_command, CliCommand, PrintOutcome};
use coinpage::config::AppConfig;
use coinpage::format::NumberFormat;
use coinpage::logging;
use coinpage::terminal::{setup_panic_hook, TerminalManager};
use coinpage::traits::DataSource;
use coinpage::ui;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Event loop tick; drives the spinner animation.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let args = parse_args(std::env::args());
    if let Some(code) = run_cli_command(&args.command) {
        std::process::exit(code);
    }

    color_eyre::install()?;

    let config = args.apply_to(AppConfig::from_env());
    let log_path = config.log_file_path();
    if let Err(e) = logging::init_logging(&log_path) {
        eprintln!("Warning: logging disabled ({}): {}", log_path.display(), e);
    }
    tracing::info!(endpoint = %config.endpoint, timeout_secs = config.timeout_secs, "Starting coinpage");

    let runtime = tokio::runtime::Runtime::new()?;
    let source = build_source(&config)?;

    if let CliCommand::Print { page } = args.command {
        let code = runtime.block_on(run_print(source, page, config.number_format))?;
        std::process::exit(code);
    }

    // Restore the terminal before color-eyre reports a panic
    setup_panic_hook();

    let mut term_manager = TerminalManager::new()?;
    let size = term_manager.size()?;
    let result = runtime.block_on(run_tui(
        term_manager.terminal(),
        source,
        config.number_format,
        (size.width, size.height),
    ));
    term_manager.restore()?;

    tracing::info!("coinpage exited");
    result
}

fn build_source(config: &AppConfig) -> Result<Arc<dyn DataSource>> {
    let client = ReqwestHttpClient::with_timeout(config.timeout())?;
    Ok(Arc::new(CoinLoreSource::with_endpoint(
        client,
        config.endpoint.clone(),
    )))
}

async fn run_print(
    source: Arc<dyn DataSource>,
    page: usize,
    number_format: NumberFormat,
) -> Result<i32> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match print_page(source, page, number_format, &mut out).await? {
        PrintOutcome::Printed { page } => {
            tracing::debug!(page, "Printed page");
            Ok(0)
        }
        PrintOutcome::Failed(message) => {
            eprintln!("{}", message);
            Ok(1)
        }
    }
}

async fn run_tui<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    source: Arc<dyn DataSource>,
    number_format: NumberFormat,
    (width, height): (u16, u16),
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut app = App::new(number_format);
    app.update_terminal_dimensions(width, height);

    let load_task = app.start_loading(source);
    let result = run_app(terminal, &mut app).await;

    // Dispose first so a fetch that settles now is discarded
    app.shutdown();
    if let Some(handle) = load_task {
        handle.abort();
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx = app
        .message_rx
        .take()
        .ok_or_else(|| eyre!("message receiver already taken"))?;

    loop {
        // Draw the UI only when needed (dirty flag)
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            Some(msg) = message_rx.recv() => {
                app.handle_message(msg);
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(Event::Key(key))) => {
                        app.handle_key_event(key);
                    }
                    Some(Ok(Event::Mouse(mouse))) => {
                        app.handle_mouse_event(mouse);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("Terminal event error: {}", e);
                        return Err(e.into());
                    }
                    None => {
                        tracing::warn!("Terminal event stream closed");
                        return Ok(());
                    }
                }
            }
        }
    }
}
