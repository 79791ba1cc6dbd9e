use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::app::{self, Command, SessionState, VIEWPORT_SIZE};
use crate::handlers::key_to_message;
use crate::message::Message;
use crate::models::config::SessionConfig;
use crate::operations::s3::S3Service;
use crate::ui::{self, Theme};

/// Main application loop following The Elm Architecture (TEA): keyboard
/// events and fetch completions both become messages, the reducer returns
/// the next state plus an optional command, and commands run as spawned
/// fetch tasks reporting back over the channel.
pub async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    service: Arc<S3Service>,
    config: &SessionConfig,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    let theme = Theme::new(config.no_color);
    let mut state = SessionState::new();
    let (tx, mut rx) = mpsc::unbounded_channel::<Message>();
    let mut needs_render = true;

    // The session starts loading; kick off the bucket fetch before the
    // first draw.
    dispatch(Command::LoadBuckets, &service, config.limit, &tx);

    loop {
        // Drain fetch completions from background tasks.
        while let Ok(msg) = rx.try_recv() {
            let (next, command) = app::update(state, msg, VIEWPORT_SIZE);
            state = next;
            if let Some(command) = command {
                dispatch(command, &service, config.limit, &tx);
            }
            needs_render = true;
        }

        if needs_render {
            terminal.draw(|f| ui::draw(f, &state, &theme))?;
            needs_render = false;
        }

        if state.should_quit {
            break;
        }

        if event::poll(std::time::Duration::from_millis(25))? {
            match event::read()? {
                Event::Key(key) => {
                    // Ignore key release events (Windows sends both press
                    // and release).
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if let Some(msg) = key_to_message(&state, key.code, key.modifiers) {
                        let (next, command) = app::update(state, msg, VIEWPORT_SIZE);
                        state = next;
                        if let Some(command) = command {
                            dispatch(command, &service, config.limit, &tx);
                        }
                        needs_render = true;
                    }
                }
                Event::Resize(_, _) => {
                    needs_render = true;
                }
                _ => {}
            }
        }
    }

    Ok(())
}

/// Executes a reducer command on a background task. Failures come back as
/// `FetchFailed` carrying the client's rendered message.
fn dispatch(
    command: Command,
    service: &Arc<S3Service>,
    limit: i32,
    tx: &mpsc::UnboundedSender<Message>,
) {
    let service = service.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let msg = match command {
            Command::LoadBuckets => match service.list_buckets().await {
                Ok(buckets) => Message::BucketsLoaded { buckets },
                Err(err) => Message::FetchFailed {
                    error: err.to_string(),
                },
            },
            Command::LoadObjects { bucket } => match service.list_objects(&bucket, limit).await {
                Ok(objects) => Message::ObjectsLoaded { bucket, objects },
                Err(err) => Message::FetchFailed {
                    error: err.to_string(),
                },
            },
        };
        // The receiver only goes away when the loop has exited.
        let _ = tx.send(msg);
    });
}
