//! Runtime: terminal lifecycle and the event loop.
//!
//! - A dedicated input thread blocks on `crossterm::event::read()` and
//!   forwards events over a channel.
//! - With `--watch`, file-system events for the data view arrive on a second
//!   channel and become `Msg::DataViewChanged`.
//! - Each iteration routes input to `MainView`, executes the returned
//!   `Effect`s, and redraws.

use std::io::Stdout;
use std::path::PathBuf;
use std::thread;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use pagenav_types::{Effect, Msg};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::TuiOptions;
use crate::app::{App, DataViewSource};
use crate::terminal_host::TerminalHost;
use crate::ui::components::Component;
use crate::ui::main_component::MainView;
use crate::watcher::watch_data_view;

type Backend = CrosstermBackend<Stdout>;

/// Spawn a dedicated input thread that blocks on terminal input and forwards
/// events over a Tokio channel.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event) => {
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    warn!(error = %error, "Failed to read terminal event");
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<Backend>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<Backend>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<Backend>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) if key_event.is_press() => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        Event::Key(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Executes effects in order. Returns `false` once one asks to exit.
fn process_effects(app: &mut App, effects: Vec<Effect>) -> bool {
    for effect in effects {
        debug!(?effect, "Applying effect");
        if !app.apply_effect(effect) {
            return false;
        }
    }
    true
}

/// Entry point for the TUI runtime: sets up the terminal, runs the event
/// loop, and restores the terminal on exit.
pub async fn run_app(options: TuiOptions) -> Result<()> {
    let source = DataViewSource::new(options.pages_path.clone(), options.default_page.clone());
    let mut app = App::new(TerminalHost::new(), source);
    let mut main_view = MainView::default();

    let (_watcher, mut file_changes) = match (options.watch, options.pages_path.as_deref()) {
        (true, Some(path)) => {
            let (watcher, receiver) = watch_data_view(path)?;
            (Some(watcher), Some(receiver))
        }
        (true, None) => {
            warn!("--watch has no effect without a pages file");
            (None, None)
        }
        (false, _) => (None, None),
    };

    let mut input_receiver = spawn_input_thread();
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut app, &mut main_view, &mut input_receiver, &mut file_changes).await;
    let cleanup = cleanup_terminal(&mut terminal);

    app.apply_effect(Effect::Quit);
    info!(updates = app.adapter().update_count(), "Terminal host stopped");
    result.and(cleanup)
}

async fn event_loop(
    terminal: &mut Terminal<Backend>,
    app: &mut App,
    main_view: &mut MainView,
    input_receiver: &mut mpsc::Receiver<Event>,
    file_changes: &mut Option<mpsc::UnboundedReceiver<PathBuf>>,
) -> Result<()> {
    render(terminal, app, main_view)?;
    loop {
        let effects = tokio::select! {
            maybe_event = input_receiver.recv() => match maybe_event {
                Some(input_event) => handle_input_event(app, main_view, input_event),
                None => {
                    warn!("Input channel closed");
                    return Ok(());
                }
            },
            maybe_change = async {
                match file_changes.as_mut() {
                    Some(receiver) => receiver.recv().await,
                    None => None,
                }
            }, if file_changes.is_some() => match maybe_change {
                Some(path) => {
                    // Editors emit bursts of events per save; reload once.
                    if let Some(receiver) = file_changes.as_mut() {
                        while receiver.try_recv().is_ok() {}
                    }
                    debug!(path = %path.display(), "Data view changed");
                    main_view.handle_message(app, Msg::DataViewChanged)
                }
                None => {
                    *file_changes = None;
                    Vec::new()
                }
            },
        };

        if !process_effects(app, effects) {
            return Ok(());
        }
        render(terminal, app, main_view)?;
    }
}
