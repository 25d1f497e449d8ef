//! Status bar component
//!
//! One line at the bottom of the screen: where the user is, the latest
//! status message, and key hints derived from the configured bindings.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::{route::Route, AppState};
use crate::presentation::config::keybindings::{key_event_to_string, Action};

#[derive(Debug, Clone)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    /// Render the status bar into the given (one line high) area
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(16), // Location
                Constraint::Min(0),     // Status message
                Constraint::Length(40), // Key hints
            ])
            .split(area);

        let location = match &state.route {
            Route::Threads => "Threads".to_string(),
            Route::Posts { thread_id } => format!("Thread {thread_id}"),
        };
        frame.render_widget(
            Paragraph::new(format!(" {location}")).style(styles.style("status_bar")),
            chunks[0],
        );

        let message = state.system.status_message.clone().unwrap_or_default();
        frame.render_widget(
            Paragraph::new(message)
                .style(styles.style("status_bar"))
                .alignment(Alignment::Center),
            chunks[1],
        );

        let hints = self.hints(state);
        frame.render_widget(
            Paragraph::new(hints)
                .style(styles.style("status_bar"))
                .alignment(Alignment::Right),
            chunks[2],
        );
    }

    /// Build key hints like `n:new enter:open q:quit` from the bindings
    fn hints(&self, state: &AppState) -> String {
        let wanted: &[(Action, &str)] = match state.route {
            Route::Threads => &[
                (Action::NewItem, "new"),
                (Action::Open, "open"),
                (Action::Quit, "quit"),
            ],
            Route::Posts { .. } => &[
                (Action::NewItem, "new"),
                (Action::Back, "back"),
                (Action::Quit, "quit"),
            ],
        };

        let bindings = &state.config.config.keybindings;
        let mut parts = Vec::with_capacity(wanted.len());
        for (action, label) in wanted {
            let key = bindings
                .iter()
                .find(|(_, a)| **a == *action)
                .and_then(|(seq, _)| seq.first())
                .map(key_event_to_string);
            if let Some(key) = key {
                parts.push(format!("{key}:{label}"));
            }
        }
        let mut hints = parts.join(" ");
        if !hints.is_empty() {
            hints.push(' ');
        }
        hints
    }
}

impl Default for StatusBarComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::config::keybindings::KeyBindings;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(state: &AppState) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).expect("terminal");
        let component = StatusBarComponent::new();
        terminal
            .draw(|frame| component.view(state, frame, frame.area()))
            .expect("draw");

        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, 0)].symbol());
        }
        out
    }

    #[test]
    fn test_shows_location_and_message() {
        let mut state = AppState::default();
        state.system.status_message = Some("Thread created!".to_string());

        let content = render(&state);
        assert!(content.contains("Threads"));
        assert!(content.contains("Thread created!"));
    }

    #[test]
    fn test_shows_thread_location() {
        let mut state = AppState::default();
        state.route = Route::Posts {
            thread_id: "12".to_string(),
        };

        let content = render(&state);
        assert!(content.contains("Thread 12"));
    }

    #[test]
    fn test_hints_follow_bindings() {
        let mut state = AppState::default();
        state.config.config.keybindings = KeyBindings::default_bindings();

        let content = render(&state);
        assert!(content.contains("n:new"));
        assert!(content.contains("q:quit"));
    }
}
