// ABOUTME: Key-binding help overlay toggled with '?'

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

const ACCENT: Color = Color::Rgb(100, 149, 237);
const MUTED: Color = Color::Rgb(120, 120, 140);

pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let binding = |keys: &str, action: &str| {
            Line::from(vec![
                Span::styled(format!("  {keys:<14}"), Style::default().fg(ACCENT)),
                Span::raw(action.to_string()),
            ])
        };

        let lines = vec![
            Line::default(),
            binding("Tab / S-Tab", "Next / previous page"),
            binding("1-6", "Jump to page (outside the coach input)"),
            binding("Enter", "Send message (coach) / start check (form)"),
            binding("Up / Down", "Scroll the coach transcript"),
            binding("s / x", "Start / stop the form check"),
            binding("?", "Toggle this help"),
            binding("q / Esc", "Quit"),
            Line::default(),
            Line::from(Span::styled(
                "  Press Esc or ? to close",
                Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
            )),
        ];

        frame.render_widget(Clear, area);
        let panel = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Help ")
                .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        );
        frame.render_widget(panel, area);
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}
