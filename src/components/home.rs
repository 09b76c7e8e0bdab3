// ABOUTME: Landing page with the app banner and page directory

use crate::app::state::Route;
use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const BRAND_FG: Color = Color::Rgb(100, 149, 237);
const MUTED: Color = Color::Rgb(120, 120, 140);

pub struct HomeComponent;

impl HomeComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::default(),
            Line::from(Span::styled(
                "◆ Macromind",
                Style::default().fg(BRAND_FG).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Your terminal fitness companion",
                Style::default().fg(MUTED),
            )),
            Line::default(),
        ];

        for (index, route) in Route::all().iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("[{}] ", index + 1),
                    Style::default().fg(BRAND_FG).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{} {}", route.icon(), route.label()), Style::default()),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Tab/Shift+Tab to switch pages · ? for help · q to quit",
            Style::default().fg(MUTED),
        )));

        let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        frame.render_widget(panel, area);
    }
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}
