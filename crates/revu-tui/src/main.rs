use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use revu_llm::{HttpCompletionClient, LlmConfig};
use revu_service::SubmissionPipeline;
use revu_store::FeedbackStore;
use revu_tui::app::App;

#[derive(Debug, Parser)]
#[command(name = "revu", about = "Feedback collection with AI-generated replies")]
struct Cli {
    /// Path to the CSV feedback store
    #[arg(long, env = "REVU_DATA_FILE", default_value = "feedback_data.csv")]
    data_file: PathBuf,

    /// Chat-completion endpoint URL
    #[arg(long, env = "REVU_API_URL")]
    api_url: Option<String>,

    /// Model identifier
    #[arg(long, env = "REVU_MODEL")]
    model: Option<String>,
}

fn main() -> Result<()> {
    // Logs go to stderr so the alternate screen stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "revu=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = LlmConfig::from_env();
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if let Some(model) = cli.model {
        config.model = model;
    }

    let client =
        HttpCompletionClient::new(config).context("failed to build completion client")?;

    let store = FeedbackStore::new(&cli.data_file);
    store.ensure_exists().with_context(|| {
        format!(
            "failed to initialize feedback store at {}",
            cli.data_file.display()
        )
    })?;

    let pipeline = SubmissionPipeline::new(Arc::new(client), store.clone());
    run_tui(App::new(pipeline, store))
}

fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e}");
    }

    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if let Event::Key(key) = event::read()? {
            // Ctrl+C always quits
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }
            // q quits unless the submission form is capturing text
            if key.code == KeyCode::Char('q') && !app.is_input_mode() {
                break;
            }
            app.handle_key(key);
        }
    }

    Ok(())
}
