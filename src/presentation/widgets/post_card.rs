use ratatui::{prelude::*, widgets::*};

use crate::domain::forum::Post;
use crate::domain::text::{truncate_text, wrap_text};

/// Longest a post body may grow inside its card before being cut
const MAX_BODY_LINES: usize = 6;

/// Card showing one post in the post list
#[derive(Clone, Debug)]
pub struct PostCard {
    pub post: Post,
    pub padding: Padding, // Only used to calc width/height
    pub highlight: bool,
    pub highlight_style: Style,
    pub muted_style: Style,
}

impl PostCard {
    pub fn new(post: Post, padding: Padding) -> Self {
        PostCard {
            post,
            padding,
            highlight: false,
            highlight_style: Style::default().add_modifier(Modifier::REVERSED),
            muted_style: Style::default().fg(Color::DarkGray),
        }
    }

    fn content_width(&self, area: &Rect) -> usize {
        area.width
            .saturating_sub(self.padding.left + self.padding.right)
            // borders
            .saturating_sub(2) as usize
    }

    fn body(&self, width: usize) -> String {
        truncate_text(&wrap_text(&self.post.post, width), MAX_BODY_LINES)
    }

    /// Height of the card at the given width: borders, wrapped body, id line
    pub fn calculate_height(&self, area: &Rect) -> u16 {
        let width = self.content_width(area);
        if width == 0 {
            return 3;
        }
        let body_lines = self.body(width).lines().count().max(1);
        (body_lines + 3) as u16
    }
}

impl Widget for PostCard {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = if self.highlight {
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.highlight_style)
        } else {
            Block::default().borders(Borders::ALL)
        };
        let inner = block.inner(area);
        block.render(area, buf);

        let width = self.content_width(&area);
        let mut lines: Vec<Line> = self
            .body(width)
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        lines.push(Line::from(Span::styled(
            format!("Post ID: {}", self.post.id),
            self.muted_style,
        )));

        Paragraph::new(Text::from(lines)).render(inner, buf);
    }
}
