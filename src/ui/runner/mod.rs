use super::{TerminalUI, UIEvent};
use crate::config::TerminalConfig;
use anyhow::Result;
use crossterm::event::{Event, EventStream};
use futures::{Stream, StreamExt};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Cursor blink and rain frame rate.
const TICK_INTERVAL: Duration = Duration::from_millis(500);

pub async fn run_tui(config: TerminalConfig) -> Result<()> {
    info!("🎂 Starting birthday terminal for {}", config.name);

    // Create channels for UI communication
    let (ui_event_tx, ui_event_rx) = mpsc::unbounded_channel::<UIEvent>();

    // Spawn terminal event handler
    let ui_event_tx_keys = ui_event_tx.clone();
    tokio::spawn(async move {
        forward_terminal_events(EventStream::new(), ui_event_tx_keys).await;
    });

    // Spawn animation ticker
    let ui_event_tx_ticks = ui_event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        loop {
            interval.tick().await;
            if ui_event_tx_ticks.send(UIEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Run the terminal UI
    let mut terminal_ui = TerminalUI::new(config, ui_event_tx, ui_event_rx);
    let result = terminal_ui.run().await;
    info!("Birthday terminal closed");
    result
}

/// Forwards key and resize events into the UI channel until the stream
/// ends, fails, or the UI stops listening.
async fn forward_terminal_events<S>(mut reader: S, ui_event_tx: mpsc::UnboundedSender<UIEvent>)
where
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    while let Some(event) = reader.next().await {
        let ui_event = match event {
            Ok(Event::Key(key_event)) => UIEvent::KeyPress(key_event),
            Ok(Event::Resize(width, height)) => UIEvent::Resize(width, height),
            Ok(_) => continue,
            Err(e) => {
                debug!("Terminal event stream failed: {}", e);
                break;
            }
        };
        if let Err(e) = ui_event_tx.send(ui_event) {
            debug!("Failed to send terminal event: {}", e);
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use futures::stream;

    fn key(c: char) -> io::Result<Event> {
        Ok(Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)))
    }

    #[tokio::test]
    async fn forwards_keys_and_resizes_in_order() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let events = vec![key('a'), Ok(Event::FocusGained), Ok(Event::Resize(100, 30))];

        forward_terminal_events(stream::iter(events), tx).await;

        assert!(matches!(rx.recv().await, Some(UIEvent::KeyPress(k)) if k.code == KeyCode::Char('a')));
        assert!(matches!(rx.recv().await, Some(UIEvent::Resize(100, 30))));
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn stream_error_ends_forwarding() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let events = vec![
            key('a'),
            Err(io::Error::new(io::ErrorKind::Other, "not a terminal")),
            key('b'),
        ];

        forward_terminal_events(stream::iter(events), tx).await;

        assert!(matches!(rx.recv().await, Some(UIEvent::KeyPress(_))));
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn closed_ui_channel_ends_forwarding() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        // An endless stream must still terminate once nobody listens.
        forward_terminal_events(stream::repeat_with(|| key('x')), tx).await;
    }
}
