//! The TUI main loop.
//!
//! Draws only when the app is dirty and otherwise sleeps on the next
//! terminal event. Events come from any stream so tests can script them.

use color_eyre::Result;
use crossterm::event::Event;
use futures::{Stream, StreamExt};
use ratatui::{backend::Backend, Terminal};

use crate::app::App;
use crate::ui;

/// Run until the app asks to quit or the event stream ends.
pub async fn run_app<B, S>(terminal: &mut Terminal<B>, app: &mut App<'_>, mut events: S) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    S: Stream<Item = std::io::Result<Event>> + Unpin,
{
    loop {
        // Draw the UI only when needed (dirty flag)
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            break;
        }

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => app.handle_event(event),
                Some(Err(e)) => return Err(e.into()),
                None => {
                    tracing::debug!("event stream closed");
                    break;
                }
            },
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("interrupted");
                app.quit();
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> std::io::Result<Event> {
        Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[tokio::test]
    async fn test_quit_key_ends_loop() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut app = App::new(content::builtin().unwrap());
        let events = futures::stream::iter(vec![key(KeyCode::Char(']')), key(KeyCode::Char('q'))]);

        run_app(&mut terminal, &mut app, events).await.unwrap();

        assert!(app.should_quit);
        assert_eq!(app.active_sheet_index(), Some(1));
    }

    #[tokio::test]
    async fn test_closed_stream_ends_loop() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = App::new(content::builtin().unwrap());

        run_app(&mut terminal, &mut app, futures::stream::empty()).await.unwrap();

        assert!(!app.should_quit);
        assert!(!app.needs_redraw);
    }

    #[tokio::test]
    async fn test_stream_error_is_returned() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = App::new(content::builtin().unwrap());
        let events = futures::stream::iter(vec![Err(std::io::Error::other("tty gone"))]);

        assert!(run_app(&mut terminal, &mut app, events).await.is_err());
    }
}
