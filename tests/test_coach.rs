// ABOUTME: Integration tests for the AI coach chat flow and reply scheduling

use macromind::app::state::{AppState, Route, COACH_REPLY_DELAY};
use macromind::fixtures::Fixtures;
use macromind::models::ChatRole;
use std::time::{Duration, Instant};

fn coach_state() -> (AppState, Instant) {
    let mut state = AppState::new(Fixtures::new());
    let t0 = Instant::now();
    state.navigate_to(Route::Coach, t0);
    (state, t0)
}

fn send(state: &mut AppState, text: &str, now: Instant) {
    state.coach.input = text.to_string();
    state.send_message(now);
}

#[test]
fn test_empty_and_whitespace_sends_are_silently_ignored() {
    let (mut state, t0) = coach_state();
    let before = state.coach.messages.len();

    for input in ["", "   ", "\t", " \n "] {
        send(&mut state, input, t0);
    }

    assert_eq!(state.coach.messages.len(), before);
    assert_eq!(state.coach.pending_replies, 0);
    assert!(state.timers.is_empty());
}

#[test]
fn test_protein_question_gets_one_user_and_one_assistant_message() {
    let (mut state, t0) = coach_state();
    let before = state.coach.messages.len();

    send(&mut state, "How much protein should I eat?", t0);

    // User message lands immediately, reply is still pending.
    assert_eq!(state.coach.messages.len(), before + 1);
    let user = state.coach.messages.last().unwrap().clone();
    assert_eq!(user.role, ChatRole::User);

    state.tick(t0 + COACH_REPLY_DELAY);
    assert_eq!(state.coach.messages.len(), before + 2);

    let assistant = state.coach.messages.last().unwrap();
    assert_eq!(assistant.role, ChatRole::Assistant);
    assert_eq!(assistant.content, state.fixtures.coach_reply);
    assert!(assistant.timestamp >= user.timestamp);

    // Exactly one of each; the timer does not refire.
    state.tick(t0 + Duration::from_secs(10));
    assert_eq!(state.coach.messages.len(), before + 2);
}

#[test]
fn test_send_trims_but_preserves_inner_whitespace() {
    let (mut state, t0) = coach_state();

    send(&mut state, "  bench press  form tips  ", t0);
    assert_eq!(
        state.coach.messages.last().unwrap().content,
        "bench press  form tips"
    );
}

#[test]
fn test_user_message_typed_during_delay_precedes_the_first_reply() {
    let (mut state, t0) = coach_state();
    let seed = state.coach.messages.len();

    send(&mut state, "one", t0);
    // Typed while the first reply is pending.
    send(&mut state, "two", t0 + Duration::from_millis(500));

    state.tick(t0 + Duration::from_millis(1000));

    let roles: Vec<ChatRole> = state.coach.messages[seed..].iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![ChatRole::User, ChatRole::User, ChatRole::Assistant]
    );

    state.tick(t0 + Duration::from_millis(1500));
    assert_eq!(state.coach.messages.len(), seed + 4);
    assert_eq!(state.coach.pending_replies, 0);
}

#[test]
fn test_each_send_gets_its_own_reply() {
    let (mut state, t0) = coach_state();
    let seed = state.coach.messages.len();

    for i in 0..3 {
        send(&mut state, &format!("question {i}"), t0 + Duration::from_millis(i * 100));
    }
    assert_eq!(state.coach.pending_replies, 3);

    state.tick(t0 + Duration::from_secs(2));

    let assistants = state.coach.messages[seed..]
        .iter()
        .filter(|m| m.role == ChatRole::Assistant)
        .count();
    assert_eq!(assistants, 3);
    assert_eq!(state.coach.pending_replies, 0);
}
