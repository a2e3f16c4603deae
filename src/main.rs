use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::sync::mpsc;

use sitesearch::App;
use sitesearch::backend::SearchClient;
use sitesearch::backend::worker::spawn_worker;
use sitesearch::config::{self, ConfigResult};

/// Search a website's content through a search backend
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Search a website's content through a search backend"
)]
struct Args {
    /// Search backend base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Pre-fill the website URL field
    #[arg(long, value_name = "URL", default_value = "")]
    url: String,

    /// Pre-fill the search query field
    #[arg(long, value_name = "TEXT", default_value = "")]
    query: String,
}

fn main() -> Result<()> {
    // Writes to /tmp/sitesearch-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        if let Ok(log_file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/sitesearch-debug.log")
        {
            env_logger::Builder::new()
                .filter_level(log::LevelFilter::Debug)
                .target(env_logger::Target::Pipe(Box::new(log_file)))
                .format(|buf, record| {
                    use std::time::SystemTime;
                    let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                    writeln!(
                        buf,
                        "[{}] [{}] {}",
                        datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                        record.level(),
                        record.args()
                    )
                })
                .init();
        }

        log::debug!("=== SITESEARCH DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let config_result = config::load_config();

    let args = Args::parse();

    // Resolve the endpoint before touching the terminal so a bad one prints cleanly
    let endpoint = args
        .endpoint
        .as_deref()
        .unwrap_or(&config_result.config.backend.endpoint);
    let client = SearchClient::new(endpoint)?;
    log::debug!("Search endpoint: {}", client.search_url());

    let terminal = init_terminal()?;

    let app = App::new(&args.url, &args.query);
    let result = run(terminal, app, client, config_result);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== SITESEARCH DEBUG SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    mut app: App,
    client: SearchClient,
    config_result: ConfigResult,
) -> Result<()> {
    if let Some(warning) = config_result.warning {
        app.notification.show_warning(&warning);
    }

    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    app.set_channels(request_tx, response_rx);
    let _worker = spawn_worker(client, request_rx, response_tx);

    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
