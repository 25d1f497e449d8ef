//! Composer input component
//!
//! Modal text input for new threads and posts. The TextArea widget is
//! stateless from the application's point of view: the authoritative
//! content and cursor live in `ComposerState`, and key events queued there
//! are replayed through a throwaway TextArea to produce the next state.

use ratatui::{prelude::*, widgets::*};
use tui_textarea::{CursorMove, TextArea};

use crate::core::state::composer::TextAreaState;
use crate::core::state::AppState;
use crate::domain::forum::Collection;
use crate::domain::ui::CursorPosition;

#[derive(Debug)]
pub struct ComposerInput<'a> {
    /// Internal TextArea widget for rendering
    /// This is synced with AppState before rendering
    textarea: TextArea<'a>,
    /// Last synced content (for dirty checking)
    last_synced_content: String,
    /// Last synced cursor position (line, column)
    last_synced_cursor: (usize, usize),
}

impl<'a> ComposerInput<'a> {
    pub fn new() -> Self {
        Self {
            textarea: TextArea::default(),
            last_synced_content: String::new(),
            last_synced_cursor: (0, 0),
        }
    }

    /// Replay queued key events against the state's text area
    ///
    /// Drains `pending_input_keys`, feeds them through a TextArea built from
    /// the current content, and returns the resulting state. Called by the
    /// update function; this is the only presentation code on a state
    /// mutation path.
    pub fn process_pending_keys(state: &mut AppState) -> TextAreaState {
        let mut textarea = build_textarea(&state.composer.textarea);

        for key in state.composer.pending_input_keys.drain(..) {
            textarea.input(key);
        }

        let (line, column) = textarea.cursor();
        TextAreaState::new(
            textarea.lines().join("\n"),
            CursorPosition { line, column },
        )
    }

    /// Render the composer overlay
    pub fn view(&mut self, state: &AppState, frame: &mut Frame, area: Rect) {
        if !state.composer.is_composing() {
            return;
        }

        let styles = &state.config.config.styles;
        let modal = centered_rect(area, 60, 7);

        // Clear whatever the list drew underneath
        frame.render_widget(Clear, modal);

        let title = match state.composer.target() {
            Some(Collection::Threads) => "New thread: Enter to submit, Esc to cancel",
            Some(Collection::Posts { .. }) => "New post: Ctrl-p to submit, Esc to cancel",
            None => "",
        };
        let block = Block::default().borders(Borders::ALL).title(title);
        let inner = block.inner(modal);
        frame.render_widget(block, modal);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Text input
                Constraint::Length(1), // Notice line
            ])
            .split(inner);

        self.sync_with_state(state);
        frame.render_widget(&self.textarea, chunks[0]);

        if state.composer.is_submitting() {
            let notice = Paragraph::new("Submitting...").style(styles.style("muted"));
            frame.render_widget(notice, chunks[1]);
        } else if let Some(error) = state.composer.error() {
            let notice = Paragraph::new(error.to_string()).style(styles.style("error"));
            frame.render_widget(notice, chunks[1]);
        }
    }

    /// Rebuild the rendering TextArea when the state moved under it
    fn sync_with_state(&mut self, state: &AppState) {
        let content = &state.composer.textarea.content;
        let cursor = &state.composer.textarea.cursor;
        let cursor_pair = (cursor.line, cursor.column);

        if *content != self.last_synced_content || cursor_pair != self.last_synced_cursor {
            self.textarea = build_textarea(&state.composer.textarea);
            self.last_synced_content = content.clone();
            self.last_synced_cursor = cursor_pair;
        }
    }
}

impl<'a> Default for ComposerInput<'a> {
    fn default() -> Self {
        Self::new()
    }
}

fn build_textarea<'a>(state: &TextAreaState) -> TextArea<'a> {
    let lines: Vec<String> = if state.content.is_empty() {
        vec![String::new()]
    } else {
        state.content.split('\n').map(str::to_string).collect()
    };
    let mut textarea = TextArea::new(lines);
    textarea.move_cursor(CursorMove::Jump(
        state.cursor.line as u16,
        state.cursor.column as u16,
    ));
    textarea
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn composing_state() -> AppState {
        let mut state = AppState::default();
        state.composer.open(Collection::Posts {
            thread_id: "1".to_string(),
        });
        state
    }

    #[test]
    fn test_process_pending_keys_types_text() {
        let mut state = composing_state();
        for c in "hi".chars() {
            state.composer.pending_input_keys.push(key(KeyCode::Char(c)));
        }

        let textarea = ComposerInput::process_pending_keys(&mut state);

        assert_eq!(textarea.content, "hi");
        assert_eq!(textarea.cursor.column, 2);
        assert!(state.composer.pending_input_keys.is_empty());
    }

    #[test]
    fn test_process_pending_keys_backspace() {
        let mut state = composing_state();
        state.composer.textarea =
            TextAreaState::new("hi".to_string(), CursorPosition { line: 0, column: 2 });
        state
            .composer
            .pending_input_keys
            .push(key(KeyCode::Backspace));

        let textarea = ComposerInput::process_pending_keys(&mut state);

        assert_eq!(textarea.content, "h");
        assert_eq!(textarea.cursor.column, 1);
    }

    #[test]
    fn test_process_pending_keys_newline() {
        let mut state = composing_state();
        state.composer.textarea =
            TextAreaState::new("ab".to_string(), CursorPosition { line: 0, column: 2 });
        state.composer.pending_input_keys.push(key(KeyCode::Enter));
        state
            .composer
            .pending_input_keys
            .push(key(KeyCode::Char('c')));

        let textarea = ComposerInput::process_pending_keys(&mut state);

        assert_eq!(textarea.content, "ab\nc");
        assert_eq!(textarea.cursor.line, 1);
        assert_eq!(textarea.cursor.column, 1);
    }

    #[test]
    fn test_centered_rect_fits_area() {
        let area = Rect::new(0, 0, 80, 24);
        let modal = centered_rect(area, 60, 7);
        assert!(modal.width <= area.width);
        assert!(modal.height <= area.height);
        assert!(modal.x >= area.x && modal.y >= area.y);
    }
}
