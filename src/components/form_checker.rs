// ABOUTME: Form checker page with the simulated camera feed and feedback panel

use crate::app::state::AppState;
use crate::models::{FeedbackSeverity, FormCheckPhase};
use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use std::time::Instant;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const GOOD_FG: Color = Color::Rgb(100, 200, 100);
const WARN_FG: Color = Color::Rgb(255, 215, 0);
const MUTED: Color = Color::Rgb(120, 120, 140);
const ACCENT: Color = Color::Rgb(100, 149, 237);

pub struct FormCheckerComponent;

impl FormCheckerComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState, now: Instant) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(area);

        self.render_feed(frame, columns[0], state, now);

        let panels = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(9), Constraint::Length(9)])
            .split(columns[1]);
        self.render_feedback(frame, panels[0], state);
        self.render_how_it_works(frame, panels[1]);
    }

    /// The feed is a pure function of the current phase.
    fn render_feed(&self, frame: &mut Frame, area: Rect, state: &AppState, now: Instant) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Form Checker ")
            .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));

        let lines: Vec<Line> = match state.form_checker.phase {
            FormCheckPhase::Idle => vec![
                Line::default(),
                Line::from(Span::styled("📷", Style::default().fg(MUTED))),
                Line::from(Span::styled(
                    "Webcam preview will appear here",
                    Style::default().fg(MUTED),
                )),
                Line::default(),
                Line::from(Span::styled(
                    "[s] Start Form Check",
                    Style::default().fg(GOOD_FG).add_modifier(Modifier::BOLD),
                )),
            ],
            FormCheckPhase::Analyzing => {
                let frame_index = state
                    .form_checker
                    .started_at
                    .map(|started| {
                        (now.saturating_duration_since(started).as_millis() / 100) as usize
                            % SPINNER_FRAMES.len()
                    })
                    .unwrap_or(0);
                vec![
                    Line::default(),
                    Line::from(Span::styled(
                        SPINNER_FRAMES[frame_index],
                        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        "Analyzing form...",
                        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        "Detecting key body points and movement patterns",
                        Style::default().fg(MUTED),
                    )),
                    Line::default(),
                    Line::from(Span::styled(
                        "[x] Stop Analysis",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )),
                ]
            }
            FormCheckPhase::Complete => vec![
                Line::default(),
                Line::from(Span::styled(
                    "✓ Analysis Complete!",
                    Style::default().fg(GOOD_FG).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Check the feedback panel for detailed results",
                    Style::default().fg(MUTED),
                )),
                Line::default(),
                Line::from(vec![
                    Span::styled("[s] Run Again  ", Style::default().fg(GOOD_FG)),
                    Span::styled("[x] Reset", Style::default().fg(MUTED)),
                ]),
            ],
        };

        let feed = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(feed, area);

        // Recording badge in the top-right corner while analyzing.
        if state.form_checker.phase.is_analyzing() && area.width > 10 {
            let badge_area = Rect {
                x: area.x + area.width - 9,
                y: area.y + 1,
                width: 7,
                height: 1,
            };
            frame.render_widget(
                Paragraph::new("● REC")
                    .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                badge_area,
            );
        }
    }

    fn render_feedback(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Feedback ")
            .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));

        let lines: Vec<Line> = if state.form_checker.phase == FormCheckPhase::Complete {
            let mut lines = Vec::new();
            for feedback in &state.fixtures.form_feedback {
                let color = match feedback.severity {
                    FeedbackSeverity::Good => GOOD_FG,
                    FeedbackSeverity::Warning => WARN_FG,
                };
                lines.push(Line::from(Span::styled(
                    format!("{} {}", feedback.severity.indicator(), feedback.title),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::styled(
                    format!("  {}", feedback.detail),
                    Style::default().fg(MUTED),
                )));
                lines.push(Line::default());
            }
            lines
        } else {
            vec![
                Line::default(),
                Line::from(Span::styled(
                    "Start form check to receive feedback",
                    Style::default().fg(MUTED),
                )),
            ]
        };

        let panel = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
        frame.render_widget(panel, area);
    }

    fn render_how_it_works(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from("1. Position yourself in frame doing an exercise"),
            Line::from("2. Press [s] to begin recording"),
            Line::from("3. The analyzer watches your movement patterns"),
            Line::from("4. Receive instant feedback on form and technique"),
            Line::default(),
            Line::from(Span::styled(
                "Mock UI: no camera or vision model is attached.",
                Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
            )),
        ];
        let panel = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(MUTED))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" How it Works "),
            );
        frame.render_widget(panel, area);
    }
}

impl Default for FormCheckerComponent {
    fn default() -> Self {
        Self::new()
    }
}
