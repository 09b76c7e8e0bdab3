// ABOUTME: Integration tests for navigation, page lifecycle, and fixture wiring

use macromind::app::state::{AppState, Route, FORM_CHECK_DURATION};
use macromind::components::NavigationComponent;
use macromind::fixtures::Fixtures;
use macromind::models::FormCheckPhase;
use std::time::{Duration, Instant};

fn new_state() -> AppState {
    AppState::new(Fixtures::new())
}

#[test]
fn test_starts_on_home() {
    let state = new_state();
    assert_eq!(state.current_route, Route::Home);
    assert!(!state.should_quit);
    assert!(!state.help_visible);
}

#[test]
fn test_exactly_one_active_nav_link_per_route() {
    for route in Route::all() {
        let states = NavigationComponent::link_states(route);
        let active_count = states.iter().filter(|(_, active)| *active).count();
        assert_eq!(active_count, 1, "route {route:?} should mark exactly one link");
        assert!(states
            .iter()
            .any(|(link, active)| *active && *link == route));
    }
}

#[test]
fn test_tab_cycle_visits_all_routes_and_wraps() {
    let mut state = new_state();
    let now = Instant::now();

    let mut visited = vec![state.current_route];
    for _ in 0..5 {
        state.next_route(now);
        visited.push(state.current_route);
    }
    assert_eq!(visited, Route::all().to_vec());

    state.next_route(now);
    assert_eq!(state.current_route, Route::Home);

    state.prev_route(now);
    assert_eq!(state.current_route, Route::Profile);
}

#[test]
fn test_route_paths_match_the_route_surface() {
    let paths: Vec<&str> = Route::all().iter().map(|r| r.path()).collect();
    assert_eq!(
        paths,
        vec![
            "/",
            "/dashboard",
            "/coach",
            "/progress",
            "/form-checker",
            "/profile"
        ]
    );
}

#[test]
fn test_stat_card_values_come_from_fixture_verbatim() {
    let state = new_state();
    let diet = &state.fixtures.diet_plan;

    // The dashboard renders these fields untransformed.
    assert_eq!(diet.calories, 2450);
    assert_eq!(diet.protein, 180);
    assert_eq!(diet.carbs, 260);

    // Meal macros roughly sum to the daily target.
    let meal_calories: u32 = diet.meals.iter().map(|m| m.calories).sum();
    assert_eq!(meal_calories, diet.calories);
}

#[test]
fn test_navigating_away_from_form_checker_kills_its_timer() {
    let mut state = new_state();
    let t0 = Instant::now();

    state.navigate_to(Route::FormChecker, t0);
    state.start_form_check(t0);
    assert_eq!(state.form_checker.phase, FormCheckPhase::Analyzing);

    state.navigate_to(Route::Dashboard, t0 + Duration::from_millis(500));
    assert!(state.timers.is_empty());

    // A tick past the old deadline must not mutate the unmounted page.
    state.tick(t0 + FORM_CHECK_DURATION + Duration::from_millis(100));
    assert_eq!(state.form_checker.phase, FormCheckPhase::Idle);
}

#[test]
fn test_coach_transcript_resets_on_navigation() {
    let mut state = new_state();
    let t0 = Instant::now();

    state.navigate_to(Route::Coach, t0);
    let seed_len = state.coach.messages.len();

    state.coach.input = "what should I eat before a workout?".to_string();
    state.send_message(t0);
    assert_eq!(state.coach.messages.len(), seed_len + 1);

    state.navigate_to(Route::Home, t0 + Duration::from_millis(100));
    assert_eq!(state.coach.messages.len(), seed_len);
    assert!(state.coach.input.is_empty());
    assert!(state.timers.is_empty());
}

#[test]
fn test_navigate_to_current_route_is_a_noop() {
    let mut state = new_state();
    let t0 = Instant::now();

    state.navigate_to(Route::Coach, t0);
    state.coach.input = "draft in progress".to_string();

    // Re-navigating to the same page must not remount it.
    state.navigate_to(Route::Coach, t0 + Duration::from_millis(100));
    assert_eq!(state.coach.input, "draft in progress");
}
