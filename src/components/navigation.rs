// ABOUTME: Fixed navigation header with route links and active-route highlight

use crate::app::state::Route;
use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const ACTIVE_BG: Color = Color::Rgb(88, 101, 242);
const INACTIVE_FG: Color = Color::Rgb(120, 120, 140);
const BRAND_FG: Color = Color::Rgb(100, 149, 237);

pub struct NavigationComponent;

impl NavigationComponent {
    pub fn new() -> Self {
        Self
    }

    /// Every nav entry paired with whether it is the active one. Exactly one
    /// entry is active: the one equal to the current route (exact match, not
    /// prefix match).
    pub fn link_states(current: Route) -> Vec<(Route, bool)> {
        Route::all().iter().map(|&route| (route, route == current)).collect()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, current: Route) {
        let mut spans: Vec<Span> = vec![
            Span::styled(
                " ◆ Macromind ",
                Style::default().fg(BRAND_FG).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ];

        for (index, (route, active)) in Self::link_states(current).into_iter().enumerate() {
            let text = format!(" {} {} [{}] ", route.icon(), route.label(), index + 1);
            let style = if active {
                Style::default()
                    .fg(Color::White)
                    .bg(ACTIVE_BG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(INACTIVE_FG)
            };
            spans.push(Span::styled(text, style));
            spans.push(Span::raw(" "));
        }

        let bar = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(bar, area);
    }
}

impl Default for NavigationComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_link_active_for_every_route() {
        for current in Route::all() {
            let states = NavigationComponent::link_states(current);
            assert_eq!(states.len(), 6);

            let active: Vec<Route> = states
                .iter()
                .filter(|(_, is_active)| *is_active)
                .map(|(route, _)| *route)
                .collect();
            assert_eq!(active, vec![current]);
        }
    }

    #[test]
    fn test_active_match_is_exact_not_prefix() {
        // "/" is a prefix of every path; only Home itself may match it.
        let states = NavigationComponent::link_states(Route::Dashboard);
        let home_active = states
            .iter()
            .find(|(route, _)| *route == Route::Home)
            .map(|(_, active)| *active)
            .unwrap();
        assert!(!home_active);
    }
}
