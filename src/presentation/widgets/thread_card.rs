use ratatui::{prelude::*, widgets::*};

use crate::domain::forum::Thread;
use crate::domain::text::ellipsize;

/// Card showing one thread in the thread list
#[derive(Clone, Debug)]
pub struct ThreadCard {
    pub thread: Thread,
    pub padding: Padding, // Only used to calc width/height
    pub highlight: bool,
    pub highlight_style: Style,
    pub muted_style: Style,
}

impl ThreadCard {
    pub fn new(thread: Thread, padding: Padding) -> Self {
        ThreadCard {
            thread,
            padding,
            highlight: false,
            highlight_style: Style::default().add_modifier(Modifier::REVERSED),
            muted_style: Style::default().fg(Color::DarkGray),
        }
    }

    /// Cards are fixed height: borders, title line, id line
    pub fn calculate_height(&self) -> u16 {
        4
    }
}

impl Widget for ThreadCard {
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

        let width = inner
            .width
            .saturating_sub(self.padding.left + self.padding.right) as usize;
        let title = ellipsize(&self.thread.title, width);
        let id_line = format!("Thread ID: {}", self.thread.id);

        let text = Text::from(vec![
            Line::from(Span::styled(
                title,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(id_line, self.muted_style)),
        ]);
        Paragraph::new(text).render(inner, buf);
    }
}
