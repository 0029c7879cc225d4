use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use kwsuggest::api::{HttpApiClient, spawn_worker};
use kwsuggest::app::App;
use kwsuggest::config::load_config;
use kwsuggest::{logging, print};

/// How long to wait for input before redrawing
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Keyword suggestion explorer
#[derive(Parser, Debug)]
#[command(version, about = "Explore keyword suggestions as a table, tree and question breakdown")]
struct Args {
    /// Keyword to search for on startup
    keyword: Option<String>,

    /// Backend base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Fetch once and print the results as plain text
    #[arg(long)]
    print: bool,

    /// Write debug logs to the cache directory
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if (args.debug || cfg!(debug_assertions))
        && let Some(path) = logging::log_path()
        && let Err(e) = logging::init(path)
    {
        eprintln!("Logging disabled: {}", e);
    }

    let config_result = load_config(args.config.as_deref());
    let mut config = config_result.config;
    if let Some(server) = &args.server {
        config.server.base_url = server.clone();
    }

    let client = HttpApiClient::new(
        &config.server.base_url,
        config.server.timeout(),
    )?;

    if args.print {
        if let Some(warning) = &config_result.warning {
            eprintln!("{}", warning);
        }
        return run_print(&client, args.keyword.as_deref().unwrap_or_default());
    }

    let mut app = App::new(&config, spawn_worker(client));
    if let Some(warning) = config_result.warning {
        app.errors.show(warning);
    }
    if let Some(keyword) = &args.keyword {
        app.input.set_keyword(keyword);
        app.submit_search();
    }

    let terminal = ratatui::init();
    execute!(std::io::stdout(), EnableBracketedPaste)?;

    let result = run(terminal, &mut app);

    let _ = execute!(std::io::stdout(), DisableBracketedPaste);
    ratatui::restore();

    result
}

fn run_print(client: &HttpApiClient, keyword: &str) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match runtime.block_on(print::render_plain(client, keyword)) {
        Ok(output) => {
            print!("{}", output);
            Ok(())
        }
        Err(e) => Err(eyre!("{}", print::failure_message(&e))),
    }
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        app.poll_api();
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(EVENT_POLL_INTERVAL)? {
            app.handle_event(event::read()?);
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
