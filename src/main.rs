use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::{fs::File, io, sync::Arc, time::Duration};
use tokio::sync::mpsc;

use filetui::{
    config::Config,
    services::{self, EntryStore, FsEntryStore},
    ui, utils, App, Command, Msg,
};

/// Terminal file manager: browse the current directory and delete entries
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <temp dir>/filetui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,
}

/// Install the file logger when debug mode is on (log macros are no-ops otherwise)
fn init_logging(debug: bool) {
    if !debug {
        return;
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(utils::get_debug_log_path()) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    init_logging(args.debug);
    info!("filetui starting");

    // Load configuration
    let config = Config::load(args.config)?;
    debug!("Config: {:?}", config);

    let root = std::env::current_dir().context("Failed to resolve current directory")?;
    info!("Browsing {:?}", root);
    let store: Arc<dyn EntryStore> = Arc::new(FsEntryStore::new(root));

    let mut app = App::new(config, store);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("filetui exiting");

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    // Background listings report back on this channel
    let (tx, mut rx) = mpsc::unbounded_channel::<Msg>();

    let size = terminal.size()?;
    app.update(Msg::Resize {
        width: size.width,
        height: size.height,
    });
    run_command(app.init(), app, &tx);

    loop {
        if app.model.ui.should_quit {
            break;
        }

        terminal.draw(|f| ui::render(f, app))?;

        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        // Process finished listings (non-blocking)
        while let Ok(msg) = rx.try_recv() {
            let command = app.update(msg);
            run_command(command, app, &tx);
        }

        if event::poll(Duration::from_millis(250))? {
            let msg = match event::read()? {
                Event::Key(key) => Some(Msg::Key(key)),
                Event::Resize(width, height) => Some(Msg::Resize { width, height }),
                _ => None,
            };

            if let Some(msg) = msg {
                let command = app.update(msg);
                run_command(command, app, &tx);
            }
        }
    }

    Ok(())
}

/// Carry out the follow-up work requested by the state machine
fn run_command(command: Command, app: &mut App, tx: &mpsc::UnboundedSender<Msg>) {
    match command {
        Command::None => {}
        Command::Quit => app.model.ui.should_quit = true,
        Command::RefreshEntries => {
            debug!("Spawning directory refresh");
            services::spawn_refresh(app.store(), tx.clone());
        }
    }
}
