//! Chatbot Terminal UI.
//!
//! Interactive terminal chat against the message service, plus a one-shot
//! `send` command for scripts.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::sync::mpsc;
use tracing::info;

use chatbot_client::config::API_URL_ENV;
use chatbot_client::{project, ChatSession, ClientConfig, MessageClient, SendOutcome};

mod app;
mod backend;
mod event;
mod ui;

use app::App;
use event::{BackendCommand, UiEvent};

#[derive(Parser)]
#[command(name = "chatbot-tui")]
#[command(about = "Chatbot Terminal UI")]
#[command(version)]
struct Cli {
    /// Message service base URL
    #[arg(long, global = true, env = API_URL_ENV)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chat (default)
    Chat,

    /// Send one message and print the transcript
    Send {
        /// Message text
        #[arg(default_value = "")]
        text: String,

        /// File to attach
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing - write to file to avoid terminal interference
    let log_path = std::env::temp_dir().join("chatbot-tui.log");
    if let Ok(file) = std::fs::File::create(&log_path) {
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_env_filter("chatbot_tui=debug,chatbot_client=debug")
            .with_ansi(false)
            .init();
    }

    let cli = Cli::parse();
    let config = match cli.api_url {
        Some(api_url) => ClientConfig { api_url },
        None => ClientConfig::from_env(),
    };

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => run_chat_tui(&config),
        Commands::Send { text, file } => run_send(&config, text, file),
    }
}

fn run_chat_tui(config: &ClientConfig) -> Result<(), Box<dyn Error>> {
    info!(api_url = %config.api_url, "Starting chat TUI");

    // Create channels for UI <-> backend communication
    let (ui_tx, ui_rx) = mpsc::channel::<UiEvent>(100);
    let (cmd_tx, cmd_rx) = mpsc::channel::<BackendCommand>(100);

    // Runtime is built up front so a failure surfaces before the terminal is taken over
    let rt = tokio::runtime::Runtime::new()?;
    let client = MessageClient::new(&config.api_url);
    let bg_handle = std::thread::spawn(move || {
        rt.block_on(backend::run_backend(client, ui_tx, cmd_rx));
    });

    // Initialize terminal (enters alternate screen, enables raw mode)
    let terminal = ratatui::init();

    // Run UI loop on main thread
    let mut app = App::new(config.api_url.clone(), ui_rx, cmd_tx);
    let result = app.run(terminal);

    // Restore terminal (exits alternate screen, disables raw mode)
    ratatui::restore();

    // Wait for background thread to finish
    let _ = bg_handle.join();

    info!("TUI shutdown complete");

    result.map_err(|e| e.into())
}

fn run_send(
    config: &ClientConfig,
    text: String,
    file: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    let rt = tokio::runtime::Runtime::new()?;
    let mut session = ChatSession::new(MessageClient::new(&config.api_url));

    session.set_input(text);
    if let Some(path) = file {
        session.attach_file(path)?;
    }

    let outcome = rt.block_on(session.send());

    for message in session.state().transcript() {
        println!("{}", project(message));
    }

    match outcome {
        SendOutcome::Resolved(_) => Ok(()),
        SendOutcome::Skipped => Err("nothing to send: give a message or --file".into()),
        SendOutcome::Failed(error) => Err(error.into()),
    }
}
