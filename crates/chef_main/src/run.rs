use std::thread;
use std::time::Duration;

use anyhow::Context;
use chef_domain::{Language, MenuSource};
use chef_services::MenuLoader;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{debug, info};

use crate::Executor;
use crate::domain::{Action, State, update};
use crate::widgets::App;

const TICK: Duration = Duration::from_millis(120);
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Runs the interactive menu until the user quits. The terminal is restored
/// on every exit path.
pub async fn run<S: MenuSource + 'static>(
    loader: MenuLoader<S>,
    language: Language,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, loader, language).await;
    ratatui::restore();
    result
}

async fn event_loop<S: MenuSource + 'static>(
    terminal: &mut DefaultTerminal,
    loader: MenuLoader<S>,
    language: Language,
) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_input_reader(tx.clone());

    let executor = Executor::new(loader, tx.clone());
    let mut state = State::new(language);
    let mut tick = tokio::time::interval(TICK);
    tx.send(Action::Initialize)
        .context("Action channel closed before start")?;
    info!(language = %language, "Menu started");

    loop {
        terminal
            .draw(|frame| frame.render_stateful_widget(App, frame.area(), &mut state))
            .context("Failed to draw the menu")?;

        let action = tokio::select! {
            action = rx.recv() => match action {
                Some(action) => action,
                None => break,
            },
            _ = tick.tick() => Action::Tick,
        };

        if executor.execute(update(&mut state, action)).is_break() {
            break;
        }
    }

    info!("Menu closed");
    Ok(())
}

/// Forwards key presses from a dedicated thread; crossterm's reader is
/// blocking.
fn spawn_input_reader(tx: UnboundedSender<Action>) {
    thread::spawn(move || {
        loop {
            match event::poll(INPUT_POLL) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        if tx.send(key.into()).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(err) => {
                        debug!(error = %err, "Terminal input closed");
                        break;
                    }
                },
                Ok(false) => {
                    if tx.is_closed() {
                        break;
                    }
                }
                Err(err) => {
                    debug!(error = %err, "Terminal input closed");
                    break;
                }
            }
        }
    });
}

