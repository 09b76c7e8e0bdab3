// ABOUTME: Progress page with the bodyweight trend chart and summary line

use crate::app::state::AppState;
use crate::models::progress;
use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, BorderType, Borders, Paragraph},
};

const ACCENT: Color = Color::Rgb(100, 149, 237);
const MUTED: Color = Color::Rgb(120, 120, 140);
const CHART_BAR: Color = Color::Rgb(100, 200, 100);

pub struct ProgressComponent;

impl ProgressComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(8)])
            .split(area);

        self.render_summary(frame, rows[0], state);
        self.render_trend_chart(frame, rows[1], state);
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let trend = &state.fixtures.weight_trend;
        let line = match (trend.first(), trend.last()) {
            (Some(start), Some(current)) => {
                let delta = current.value as i64 - start.value as i64;
                Line::from(vec![
                    Span::styled("Start: ", Style::default().fg(MUTED)),
                    Span::styled(
                        format!("{} kg", start.value),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("   Current: ", Style::default().fg(MUTED)),
                    Span::styled(
                        format!("{} kg", current.value),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("   Change: ", Style::default().fg(MUTED)),
                    Span::styled(
                        format!("{delta:+} kg"),
                        Style::default().fg(CHART_BAR).add_modifier(Modifier::BOLD),
                    ),
                ])
            }
            _ => Line::from(Span::styled("No progress data", Style::default().fg(MUTED))),
        };

        let panel = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Progress ")
                .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        );
        frame.render_widget(panel, area);
    }

    fn render_trend_chart(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let data = progress::chart_data(&state.fixtures.weight_trend);
        let chart = BarChart::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Bodyweight (kg) ")
                    .title_style(Style::default().fg(ACCENT)),
            )
            .data(&data)
            .bar_width(5)
            .bar_gap(2)
            .bar_style(Style::default().fg(CHART_BAR))
            .value_style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(chart, area);
    }
}

impl Default for ProgressComponent {
    fn default() -> Self {
        Self::new()
    }
}
