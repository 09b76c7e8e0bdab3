// ABOUTME: Static profile page rendered from the profile fixture

use crate::app::state::AppState;
use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const ACCENT: Color = Color::Rgb(100, 149, 237);
const MUTED: Color = Color::Rgb(120, 120, 140);

pub struct ProfileComponent;

impl ProfileComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let profile = &state.fixtures.profile;
        let field = |label: &str, value: String| {
            Line::from(vec![
                Span::styled(format!("{label:<10}"), Style::default().fg(MUTED)),
                Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
            ])
        };

        let lines = vec![
            Line::default(),
            field("Name", profile.name.clone()),
            field("Age", profile.age.to_string()),
            field("Height", format!("{} cm", profile.height_cm)),
            field("Weight", format!("{} kg", profile.weight_kg)),
            field("Goal", profile.goal.clone()),
        ];

        let card = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Profile ")
                .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        );
        frame.render_widget(card, area);
    }
}

impl Default for ProfileComponent {
    fn default() -> Self {
        Self::new()
    }
}
