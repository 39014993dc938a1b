mod app;
mod config;
mod error;
mod event;
mod github;
mod i18n;
mod prefs;
mod profile;
mod projects;
mod reveal;
#[cfg(test)]
mod test_utils;
mod ui;
mod view;

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
use github::client::GitHubClient;
use prefs::FileStorage;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;
use ui::input::{map_key, Action};
use ui::terminal::TerminalView;
use view::{Interaction, ViewBinder};

#[derive(Parser)]
#[command(name = "folio", about = "TUI personal portfolio: GitHub projects, ranked and filtered")]
struct Cli {
    #[arg(long, help = "Directory for preferences and the log file")]
    state_dir: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load(cli.state_dir);
    init_logging(&config);

    let mut app = App::new(TerminalView::new(FileStorage::open(config.preferences_path())));
    app.init();

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

    let fetch_tx = tx.clone();
    let fetch = tokio::spawn(async move {
        let result = match GitHubClient::new(profile::ACCOUNT) {
            Ok(client) => {
                tracing::info!(account = client.account(), "loading projects");
                client.fetch_all().await
            }
            Err(e) => Err(e),
        };
        let _ = fetch_tx.send(AppEvent::FetchResult(result));
    });

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

    let tick_tx = tx.clone();
    let tick_rate = Duration::from_millis(config.tick_rate_ms.max(1));
    let ticker = tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    let scroll_step = config.scroll_step as isize;
    let mut should_quit = false;
    let mut dirty = true;
    while !should_quit {
        if dirty {
            terminal.draw(|f| app.view_mut().render(f))?;
            // Reveals and the nav shadow land after the frame that caused them.
            dirty = report_scroll(&mut app);
        }

        let first = match rx.recv().await {
            Some(e) => e,
            None => break,
        };

        dirty |= process_event(&mut app, first, scroll_step, &mut should_quit);
        while let Ok(pending) = rx.try_recv() {
            dirty |= process_event(&mut app, pending, scroll_step, &mut should_quit);
        }
    }

    fetch.abort();
    ticker.abort();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Logs go to a file; stdout belongs to the alternate screen.
fn init_logging(config: &Config) {
    let path = config.log_path();
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let file = match std::fs::OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("warning: cannot open log file {}: {e}", path.display());
            return;
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

/// Feeds scroll position and section visibility back to the controller.
fn report_scroll(app: &mut App<TerminalView>) -> bool {
    let Some(offset_px) = app.view_mut().take_scroll_change() else {
        return false;
    };
    app.dispatch(Interaction::Scrolled { offset_px });
    let entries = app.view().visibility();
    app.dispatch(Interaction::Visibility(entries));
    true
}

/// Returns whether the screen needs a redraw.
fn process_event(
    app: &mut App<TerminalView>,
    event: AppEvent,
    scroll_step: isize,
    should_quit: &mut bool,
) -> bool {
    match event {
        AppEvent::Tick => app.view_mut().tick(),
        AppEvent::Resize => true,
        AppEvent::FetchResult(result) => {
            app.view_mut().mark_synced(result.is_ok());
            app.finish_fetch(result);
            true
        }
        AppEvent::Key(key) => {
            let action = map_key(key, app.view().mode());
            handle_action(app, action, scroll_step, should_quit);
            true
        }
    }
}

fn handle_action(
    app: &mut App<TerminalView>,
    action: Action,
    scroll_step: isize,
    should_quit: &mut bool,
) {
    match action {
        Action::Quit => *should_quit = true,
        Action::ScrollDown => app.view_mut().scroll_by(scroll_step),
        Action::ScrollUp => app.view_mut().scroll_by(-scroll_step),
        Action::PageDown => {
            let rows = app.view().page_rows() as isize;
            app.view_mut().scroll_by(rows);
        }
        Action::PageUp => {
            let rows = app.view().page_rows() as isize;
            app.view_mut().scroll_by(-rows);
        }
        Action::Top => app.view_mut().scroll_to_top(),
        Action::Bottom => app.view_mut().scroll_to_bottom(),
        Action::ToggleTheme => app.dispatch(Interaction::ToggleTheme),
        Action::ToggleLanguage => app.dispatch(Interaction::ToggleLanguage),
        Action::ToggleMenu => app.dispatch(Interaction::ToggleMenu),
        Action::MenuUp => app.view_mut().move_menu(-1),
        Action::MenuDown => app.view_mut().move_menu(1),
        Action::MenuSelect => {
            if let Some(href) = app.view().menu_href(None) {
                app.dispatch(Interaction::FollowLink(href));
            }
        }
        Action::MenuJump(idx) => {
            if let Some(href) = app.view().menu_href(Some(idx)) {
                app.dispatch(Interaction::FollowLink(href));
            }
        }
        Action::Filter(filter) => app.dispatch(Interaction::SelectFilter(filter)),
        Action::NextFilter => {
            let next = app.view().active_filter().next();
            app.dispatch(Interaction::SelectFilter(next));
        }
        Action::CardLeft => app.view_mut().select_card(-1),
        Action::CardRight => app.view_mut().select_card(1),
        Action::OpenCode | Action::OpenDemo => {
            let idx = usize::from(action == Action::OpenDemo);
            if let Some(url) = app.view().selected_link(idx) {
                app.view_mut().open_external(&url);
            }
        }
        Action::DownloadCv => app.dispatch(Interaction::DownloadCv),
        Action::Help => app.view_mut().set_help(true),
        Action::ClosePopup => app.view_mut().set_help(false),
        Action::None => {}
    }
}
