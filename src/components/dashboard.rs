// ABOUTME: Dashboard page rendering stat cards, meal and workout plans, and the weekly chart

use crate::app::state::AppState;
use crate::models::progress;
use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, BorderType, Borders, Paragraph, Wrap},
};
use std::time::Instant;

const CARD_FG: Color = Color::Rgb(220, 220, 230);
const MUTED: Color = Color::Rgb(120, 120, 140);
const ACCENT: Color = Color::Rgb(100, 149, 237);
const CHART_BAR: Color = Color::Rgb(138, 99, 210);

pub struct DashboardComponent;

impl DashboardComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState, now: Instant) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),  // Stat cards
                Constraint::Min(10),    // Meal + workout plans
                Constraint::Length(12), // Weekly chart
            ])
            .split(area);

        self.render_stat_cards(frame, rows[0], state, now);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);
        self.render_meal_plan(frame, columns[0], state);
        self.render_workout_plan(frame, columns[1], state);

        self.render_weekly_chart(frame, rows[2], state);
    }

    fn render_stat_cards(&self, frame: &mut Frame, area: Rect, state: &AppState, now: Instant) {
        let diet = &state.fixtures.diet_plan;
        let cards: [(&str, String); 4] = [
            ("Calories", diet.calories.to_string()),
            ("Protein", format!("{}g", diet.protein)),
            ("Carbs", format!("{}g", diet.carbs)),
            ("Water", format!("{}L", state.fixtures.water_goal_litres)),
        ];

        let slots = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(25); 4])
            .split(area);

        let revealed = state.dashboard.revealed_cards(now, cards.len());
        for (index, (title, value)) in cards.iter().enumerate() {
            // Values are present from the first frame; cards not yet revealed
            // just render dimmed until their stagger slot passes.
            let style = if index < revealed {
                Style::default().fg(CARD_FG).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED).add_modifier(Modifier::DIM)
            };

            let card = Paragraph::new(vec![
                Line::from(Span::styled(*title, Style::default().fg(MUTED))),
                Line::from(Span::styled(value.clone(), style)),
            ])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
            frame.render_widget(card, slots[index]);
        }
    }

    fn render_meal_plan(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut lines: Vec<Line> = Vec::new();
        for meal in &state.fixtures.diet_plan.meals {
            lines.push(Line::from(vec![
                Span::styled(
                    meal.name.clone(),
                    Style::default().fg(CARD_FG).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {}", meal.time), Style::default().fg(MUTED)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}", meal.items.join(" · ")),
                Style::default().fg(CARD_FG),
            )));
            lines.push(Line::from(Span::styled(
                format!("  {}", meal.macro_summary()),
                Style::default().fg(MUTED),
            )));
            lines.push(Line::default());
        }

        let panel = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Today's Meal Plan ")
                .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
                // Visually present but inert, like the source UI.
                .title(
                    ratatui::widgets::block::Title::from(Span::styled(
                        " [ Regenerate ] ",
                        Style::default().fg(MUTED),
                    ))
                    .alignment(Alignment::Right),
                ),
        );
        frame.render_widget(panel, area);
    }

    fn render_workout_plan(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let workout = &state.fixtures.workout_plan;
        let mut lines: Vec<Line> = vec![
            Line::from(vec![
                Span::styled(workout.name.clone(), Style::default().fg(MUTED)),
                Span::styled(
                    format!("  {}", workout.duration),
                    Style::default().fg(CARD_FG).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::default(),
        ];
        for exercise in &workout.exercises {
            lines.push(Line::from(vec![
                Span::styled(
                    exercise.name.clone(),
                    Style::default().fg(CARD_FG).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  [{}]", exercise.muscle_group),
                    Style::default().fg(ACCENT),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}", exercise.prescription()),
                Style::default().fg(MUTED),
            )));
        }

        let panel = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Workout Plan ")
                .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
                .title(
                    ratatui::widgets::block::Title::from(Span::styled(
                        " [ Regenerate ] ",
                        Style::default().fg(MUTED),
                    ))
                    .alignment(Alignment::Right),
                ),
        );
        frame.render_widget(panel, area);
    }

    fn render_weekly_chart(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let data = progress::chart_data(&state.fixtures.weekly_calories);
        let chart = BarChart::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Weekly Calorie Intake ")
                    .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            )
            .data(&data)
            .bar_width(7)
            .bar_gap(2)
            .bar_style(Style::default().fg(CHART_BAR))
            .value_style(Style::default().fg(CARD_FG).add_modifier(Modifier::BOLD));
        frame.render_widget(chart, area);
    }
}

impl Default for DashboardComponent {
    fn default() -> Self {
        Self::new()
    }
}
