// ABOUTME: Event handling system mapping keyboard input to app actions

use crate::app::state::{AppState, Route};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    NextRoute,
    PreviousRoute,
    GoToRoute(Route),
    ToggleHelp,
    // AI coach page
    CoachInputChar(char),
    CoachBackspace,
    CoachSend,
    ScrollCoachUp,
    ScrollCoachDown,
    // Form checker page
    FormCheckStart,
    FormCheckStop,
}

pub struct EventHandler;

impl EventHandler {
    /// Translate a key press into an app event for the current state.
    /// Returns `None` for keys that mean nothing right now.
    pub fn handle_key_event(key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        // Ctrl+C always quits, regardless of focus.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(AppEvent::Quit);
        }

        // A visible help overlay swallows everything except its close keys.
        if state.help_visible {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    Some(AppEvent::ToggleHelp)
                }
                _ => None,
            };
        }

        // Route cycling works on every page.
        match key.code {
            KeyCode::Tab => return Some(AppEvent::NextRoute),
            KeyCode::BackTab => return Some(AppEvent::PreviousRoute),
            KeyCode::Esc => return Some(AppEvent::Quit),
            _ => {}
        }

        if state.current_route == Route::Coach {
            // The coach page owns printable keys for its input buffer, so the
            // digit shortcuts and q/? only apply elsewhere.
            return match key.code {
                KeyCode::Enter => Some(AppEvent::CoachSend),
                KeyCode::Backspace => Some(AppEvent::CoachBackspace),
                KeyCode::Up => Some(AppEvent::ScrollCoachUp),
                KeyCode::Down => Some(AppEvent::ScrollCoachDown),
                KeyCode::Char(ch) => Some(AppEvent::CoachInputChar(ch)),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q') => Some(AppEvent::Quit),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Char(ch @ '1'..='6') => Route::from_digit(ch).map(AppEvent::GoToRoute),
            KeyCode::Char('s') | KeyCode::Enter if state.current_route == Route::FormChecker => {
                Some(AppEvent::FormCheckStart)
            }
            KeyCode::Char('x') if state.current_route == Route::FormChecker => {
                Some(AppEvent::FormCheckStop)
            }
            _ => None,
        }
    }

    /// Apply an event to the state. Scroll events are handled by the layout
    /// before this is reached (the coach component owns its scroll offset).
    pub fn process_event(event: AppEvent, state: &mut AppState, now: Instant) {
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::NextRoute => state.next_route(now),
            AppEvent::PreviousRoute => state.prev_route(now),
            AppEvent::GoToRoute(route) => state.navigate_to(route, now),
            AppEvent::ToggleHelp => state.toggle_help(),
            AppEvent::CoachInputChar(ch) => state.coach_input_char(ch),
            AppEvent::CoachBackspace => state.coach_backspace(),
            AppEvent::CoachSend => state.send_message(now),
            AppEvent::FormCheckStart => state.start_form_check(now),
            AppEvent::FormCheckStop => state.stop_form_check(),
            AppEvent::ScrollCoachUp | AppEvent::ScrollCoachDown => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixtures;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state_at(route: Route) -> AppState {
        let mut state = AppState::new(Fixtures::new());
        state.navigate_to(route, Instant::now());
        state
    }

    #[test]
    fn test_tab_cycles_routes_everywhere() {
        for route in Route::all() {
            let state = state_at(route);
            assert_eq!(
                EventHandler::handle_key_event(key(KeyCode::Tab), &state),
                Some(AppEvent::NextRoute)
            );
        }
    }

    #[test]
    fn test_printable_keys_feed_coach_input() {
        let state = state_at(Route::Coach);

        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Char('q')), &state),
            Some(AppEvent::CoachInputChar('q'))
        );
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Char('3')), &state),
            Some(AppEvent::CoachInputChar('3'))
        );
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Enter), &state),
            Some(AppEvent::CoachSend)
        );
    }

    #[test]
    fn test_digit_shortcut_navigates_outside_coach() {
        let state = state_at(Route::Dashboard);
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Char('3')), &state),
            Some(AppEvent::GoToRoute(Route::Coach))
        );
    }

    #[test]
    fn test_form_checker_start_stop_keys() {
        let state = state_at(Route::FormChecker);
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Char('s')), &state),
            Some(AppEvent::FormCheckStart)
        );
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Char('x')), &state),
            Some(AppEvent::FormCheckStop)
        );

        // Start/stop keys mean nothing on other pages.
        let dashboard = state_at(Route::Dashboard);
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Char('x')), &dashboard),
            None
        );
    }

    #[test]
    fn test_ctrl_c_quits_even_in_coach_input() {
        let state = state_at(Route::Coach);
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            EventHandler::handle_key_event(event, &state),
            Some(AppEvent::Quit)
        );
    }

    #[test]
    fn test_help_overlay_swallows_other_keys() {
        let mut state = state_at(Route::Dashboard);
        state.toggle_help();

        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Char('3')), &state),
            None
        );
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Esc), &state),
            Some(AppEvent::ToggleHelp)
        );
    }
}
