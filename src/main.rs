mod app;
mod config;
mod error;
mod event;
mod github;
mod session;
mod ui;

use app::App;
use clap::Parser;
use config::Config;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use event::AppEvent;
use futures::StreamExt;
use github::search::SearchClient;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "repohunt", about = "TUI GitHub repository search browser")]
struct Cli {
    #[arg(help = "Initial search query")]
    query: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load(cli.query);

    let client = match SearchClient::new(config.request_timeout()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let initial_query = config.default_query.clone();
    let mut app = App::new(&config);

    // Install panic hook before entering raw mode so terminal is restored on panic
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();

    let input_tx = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            let app_event = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
                Event::Resize(_, _) => Some(AppEvent::Resize),
                _ => None,
            };
            if let Some(e) = app_event {
                if input_tx.send(e).is_err() {
                    break;
                }
            }
        }
    });

    app.submit_search(&initial_query);
    dispatch_fetch(&mut app, &client, &tx);

    loop {
        terminal.draw(|f| app.render(f))?;

        let first = match rx.recv().await {
            Some(e) => e,
            None => break,
        };
        app.handle_event(first);
        while let Ok(pending) = rx.try_recv() {
            app.handle_event(pending);
        }

        dispatch_fetch(&mut app, &client, &tx);

        if app.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Spawn the network call for a pending page request. The result is applied
/// to app state only via the event channel, back on the UI loop.
fn dispatch_fetch(app: &mut App, client: &SearchClient, tx: &mpsc::UnboundedSender<AppEvent>) {
    if let Some(req) = app.take_pending_fetch() {
        let client = client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let generation = req.generation;
            let result = client.fetch_page(&req).await;
            let _ = tx.send(AppEvent::FetchDone { generation, result });
        });
    }
}
