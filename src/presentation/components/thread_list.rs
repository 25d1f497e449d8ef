//! Thread list component
//!
//! Displays the scrollable list of threads with its load-more affordance.
//! This is a stateless component that renders list data from AppState.

use ratatui::{prelude::*, widgets::*};
use tui_widget_list::{ListBuilder, ListView};

use crate::{core::state::AppState, presentation::widgets::thread_card::ThreadCard};

#[derive(Debug, Clone)]
pub struct ThreadListComponent;

impl ThreadListComponent {
    pub fn new() -> Self {
        Self
    }

    /// Render the thread list view
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(1), // Banner (success / error)
                Constraint::Min(0),    // List
                Constraint::Length(1), // Footer
            ])
            .split(area);

        let title = Paragraph::new("Threads")
            .style(styles.style("title"))
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        // One banner line: a fetch error wins over a stale success notice
        if let Some(error) = state.threads.error() {
            let banner = Paragraph::new(error.to_string())
                .style(styles.style("error"))
                .alignment(Alignment::Center);
            frame.render_widget(banner, chunks[1]);
        } else if let Some(success) = state.composer.success() {
            let banner = Paragraph::new(success.to_string())
                .style(styles.style("success"))
                .alignment(Alignment::Center);
            frame.render_widget(banner, chunks[1]);
        }

        self.render_list(state, frame, chunks[2]);
        self.render_footer(state, frame, chunks[3]);
    }

    fn render_list(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let padding = Padding::new(1, 1, 0, 0);

        if state.threads.is_empty() {
            if !state.threads.is_loading() {
                let empty_text = Paragraph::new("No threads found.")
                    .style(styles.style("muted"))
                    .alignment(Alignment::Center);
                frame.render_widget(empty_text, area);
            }
            return;
        }

        let highlight_style = styles.style("highlight");
        let muted_style = styles.style("muted");
        let cards: Vec<_> = state
            .threads
            .items()
            .iter()
            .map(|thread| {
                let mut card = ThreadCard::new(thread.clone(), padding);
                card.highlight_style = highlight_style;
                card.muted_style = muted_style;
                let height = card.calculate_height();
                (card, height)
            })
            .collect();

        let builder = ListBuilder::new(move |context| {
            let mut item = cards[context.index].clone();
            item.0.highlight = context.is_selected;
            (item.0, item.1)
        });

        let mut list_state = tui_widget_list::ListState::default();
        list_state.select(state.threads.selected_index());

        let list = ListView::new(builder, state.threads.len())
            .block(Block::default().padding(padding));

        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_footer(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;

        let text = if state.threads.is_loading() {
            "Loading..."
        } else if state.threads.has_more() {
            "Load more (m)"
        } else {
            "All caught up"
        };
        let footer = Paragraph::new(text)
            .style(styles.style("muted"))
            .alignment(Alignment::Center);
        frame.render_widget(footer, area);
    }
}

impl Default for ThreadListComponent {
    fn default() -> Self {
        Self::new()
    }
}
