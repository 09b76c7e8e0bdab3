// ABOUTME: Top-level layout arranging the nav header, the current page, and overlays

use super::{
    CoachComponent, DashboardComponent, FormCheckerComponent, HelpComponent, HomeComponent,
    NavigationComponent, ProfileComponent, ProgressComponent,
};
use crate::app::state::{AppState, Route};
use ratatui::{
    prelude::*,
    style::{Color, Style},
    widgets::Paragraph,
};
use std::time::Instant;

const MUTED: Color = Color::Rgb(120, 120, 140);

pub struct LayoutComponent {
    navigation: NavigationComponent,
    home: HomeComponent,
    dashboard: DashboardComponent,
    coach: CoachComponent,
    progress: ProgressComponent,
    form_checker: FormCheckerComponent,
    profile: ProfileComponent,
    help: HelpComponent,
    last_route: Route,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            navigation: NavigationComponent::new(),
            home: HomeComponent::new(),
            dashboard: DashboardComponent::new(),
            coach: CoachComponent::new(),
            progress: ProgressComponent::new(),
            form_checker: FormCheckerComponent::new(),
            profile: ProfileComponent::new(),
            help: HelpComponent::new(),
            last_route: Route::Home,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let now = Instant::now();

        // Per-page view state follows page teardown.
        if state.current_route != self.last_route {
            if self.last_route == Route::Coach {
                self.coach.reset();
            }
            self.last_route = state.current_route;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Nav header
                Constraint::Min(0),    // Page body
                Constraint::Length(1), // Footer hints
            ])
            .split(frame.size());

        self.navigation.render(frame, chunks[0], state.current_route);

        match state.current_route {
            Route::Home => self.home.render(frame, chunks[1]),
            Route::Dashboard => self.dashboard.render(frame, chunks[1], state, now),
            Route::Coach => self.coach.render(frame, chunks[1], state),
            Route::Progress => self.progress.render(frame, chunks[1], state),
            Route::FormChecker => self.form_checker.render(frame, chunks[1], state, now),
            Route::Profile => self.profile.render(frame, chunks[1], state),
        }

        self.render_footer(frame, chunks[2], state);

        if state.help_visible {
            let overlay = centered_rect(50, 60, frame.size());
            self.help.render(frame, overlay);
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let hint = match state.current_route {
            Route::Coach => " Enter send · ↑/↓ scroll · Tab next page · Esc quit",
            Route::FormChecker => " s start · x stop · Tab next page · ? help · q quit",
            _ => " Tab next page · 1-6 jump · ? help · q quit",
        };
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(MUTED)),
            area,
        );
    }

    pub fn coach_mut(&mut self) -> &mut CoachComponent {
        &mut self.coach
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// Centered sub-rect taking the given percentage of the parent in each axis.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
