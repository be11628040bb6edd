// Event handling and main UI loop

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::config::Config;
use crate::ui::state::{AppState, Tab};
use crate::ui::tabs;

mod navigation;

// Event types sent from the dedicated event thread to the main loop
enum UiEvent {
    Input(Event), // Keyboard, mouse, or other terminal events
    Tick,         // Periodic redraw for the header clock
}

/// Spawn a dedicated thread for event polling. Nothing changes without
/// user input, so a slow tick is enough to keep the clock fresh.
fn spawn_event_thread(tx: mpsc::Sender<UiEvent>) {
    let tick_rate = Duration::from_millis(250);

    thread::spawn(move || {
        let mut last_tick = Instant::now();
        loop {
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout).unwrap_or(false) {
                if let Ok(evt) = event::read() {
                    if tx.send(UiEvent::Input(evt)).is_err() {
                        break; // Main thread dropped the receiver
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if tx.send(UiEvent::Tick).is_err() {
                    break;
                }
                last_tick = Instant::now();
            }
        }
    });
}

pub fn run_ui(config: &Config) -> io::Result<()> {
    run_ui_with_options(None, config)
}

/// Launch the dashboard. `start_tab` (from the CLI) wins over the
/// configured startup tab; unknown identifiers degrade to Overview.
pub fn run_ui_with_options(start_tab: Option<&str>, config: &Config) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::default();
    app_state.active_tab = Tab::from_id(start_tab.unwrap_or(&config.startup.tab));
    app_state.show_insights = config.display.show_insights;
    app_state.show_integrations = config.display.show_integrations;

    debug!(tab = app_state.active_tab.id(), "starting dashboard");

    let (event_tx, event_rx) = mpsc::channel();
    spawn_event_thread(event_tx);

    let result = run_app(&mut terminal, &mut app_state, event_rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    event_rx: Receiver<UiEvent>,
) -> io::Result<()> {
    loop {
        // Block for at least one event, then drain the queue so a tick
        // backlog never delays user input
        let mut pending_inputs: Vec<Event> = Vec::new();
        match event_rx.recv() {
            Ok(UiEvent::Input(ev)) => pending_inputs.push(ev),
            Ok(UiEvent::Tick) => {}
            Err(_) => return Ok(()), // Channel closed
        }
        while let Ok(evt) = event_rx.try_recv() {
            if let UiEvent::Input(ev) = evt {
                pending_inputs.push(ev);
            }
        }

        for input in pending_inputs {
            match input {
                Event::Key(key) => {
                    if handle_key(key, state) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => {
                    navigation::handle_mouse(mouse, state);
                }
                _ => {
                    // Resize etc. - the next draw picks up the new size
                }
            }
        }

        let clock = chrono::Local::now().format("%a %d %b  %H:%M").to_string();
        terminal.draw(|frame| tabs::draw(frame, state, &clock))?;
    }
}

fn should_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn handle_key(key: KeyEvent, state: &mut AppState) -> bool {
    if should_quit(&key) {
        return true;
    }
    navigation::handle_key(key, state);
    false
}
