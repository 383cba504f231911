use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, TITLE_ACCENT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    service: &'a str,
    subdivisions: usize,
    municipalities: usize,
}

impl<'a> Header<'a> {
    pub fn new(service: &'a str, subdivisions: usize, municipalities: usize) -> Self {
        Self {
            service,
            subdivisions,
            municipalities,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title_style = Style::default()
            .fg(TITLE_ACCENT)
            .add_modifier(Modifier::BOLD);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("Select location", title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.service.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} UF", self.subdivisions), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} municipalities", self.municipalities), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
