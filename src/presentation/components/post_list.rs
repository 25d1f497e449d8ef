//! Post list component
//!
//! Displays the posts of the currently open thread. Same affordances as the
//! thread list; the post composer itself is an overlay drawn separately.

use ratatui::{prelude::*, widgets::*};
use tui_widget_list::{ListBuilder, ListView};

use crate::{
    core::state::{route::Route, AppState},
    presentation::widgets::post_card::PostCard,
};

#[derive(Debug, Clone)]
pub struct PostListComponent;

impl PostListComponent {
    pub fn new() -> Self {
        Self
    }

    /// Render the post list view
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

        let thread_id = match &state.route {
            Route::Posts { thread_id } => thread_id.as_str(),
            Route::Threads => "?",
        };
        let title = Paragraph::new(format!("Posts (Thread {thread_id})"))
            .style(styles.style("title"))
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        if let Some(error) = state.posts.error() {
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

        if state.posts.is_empty() {
            if !state.posts.is_loading() {
                let empty_text = Paragraph::new("No posts found.")
                    .style(styles.style("muted"))
                    .alignment(Alignment::Center);
                frame.render_widget(empty_text, area);
            }
            return;
        }

        let highlight_style = styles.style("highlight");
        let muted_style = styles.style("muted");
        let cards: Vec<_> = state
            .posts
            .items()
            .iter()
            .map(|post| {
                let mut card = PostCard::new(post.clone(), padding);
                card.highlight_style = highlight_style;
                card.muted_style = muted_style;
                let height = card.calculate_height(&area);
                (card, height)
            })
            .collect();

        let builder = ListBuilder::new(move |context| {
            let mut item = cards[context.index].clone();
            item.0.highlight = context.is_selected;
            (item.0, item.1)
        });

        let mut list_state = tui_widget_list::ListState::default();
        list_state.select(state.posts.selected_index());

        let list = ListView::new(builder, state.posts.len())
            .block(Block::default().padding(padding));

        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_footer(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;

        let text = if state.posts.is_loading() {
            "Loading..."
        } else if state.posts.has_more() {
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

impl Default for PostListComponent {
    fn default() -> Self {
        Self::new()
    }
}
