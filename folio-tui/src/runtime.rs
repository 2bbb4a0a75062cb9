//! The frame loop: render, then sleep until input, a background event, or
//! the next state deadline, whichever comes first.

use std::time::{Duration, Instant};

use crossterm::event::EventStream;
use futures::StreamExt;
use termpage::Terminal;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;

use crate::app::{App, AppEvent};
use crate::error::AppError;

/// Animation cadence while a transition or glide is running.
const FRAME: Duration = Duration::from_millis(33);

pub async fn run(
    mut app: App,
    mut events_rx: UnboundedReceiver<AppEvent>,
    cancel: CancellationToken,
    terminal: &mut Terminal,
) -> Result<(), AppError> {
    let mut stream = EventStream::new();

    loop {
        let now = Instant::now();
        app.tick(now, terminal.layout());

        if app.should_quit() {
            break;
        }

        let root = app.page();
        terminal.render(&root)?;

        let mut deadline = app.deadline(now);
        if terminal.has_active_motion() {
            let frame = now + FRAME;
            deadline = Some(deadline.map_or(frame, |d| d.min(frame)));
        }

        tokio::select! {
            _ = cancel.cancelled() => break,
            maybe = stream.next() => match maybe {
                Some(Ok(event)) => {
                    app.handle(&[event], &root, terminal.layout(), Instant::now());
                }
                Some(Err(err)) => {
                    log::error!("terminal event stream error: {err}");
                }
                None => break,
            },
            event = events_rx.recv() => {
                if let Some(event) = event {
                    app.apply(event, Instant::now());
                }
            }
            _ = sleep_until_optional(deadline) => {}
        }
    }

    Ok(())
}

/// Sleep until the deadline, or forever when there is none.
async fn sleep_until_optional(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => {
            tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
        }
        None => std::future::pending().await,
    }
}
