// ABOUTME: Application state, routing, and page transitions for the Macromind TUI

use crate::app::timers::{TimerAction, TimerHandle, TimerQueue};
use crate::fixtures::Fixtures;
use crate::models::{ChatMessage, FormCheckPhase};
use chrono::Local;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Delay before the canned coach reply lands.
pub const COACH_REPLY_DELAY: Duration = Duration::from_millis(1000);
/// How long a simulated form analysis runs before completing.
pub const FORM_CHECK_DURATION: Duration = Duration::from_millis(3000);
/// Gap between successive stat cards in the dashboard entrance reveal.
pub const CARD_REVEAL_STAGGER: Duration = Duration::from_millis(100);

/// The six pages reachable from the navigation shell. Mirrors the route
/// surface `/`, `/dashboard`, `/coach`, `/progress`, `/form-checker`,
/// `/profile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Dashboard,
    Coach,
    Progress,
    FormChecker,
    Profile,
}

impl Route {
    pub fn all() -> [Route; 6] {
        [
            Route::Home,
            Route::Dashboard,
            Route::Coach,
            Route::Progress,
            Route::FormChecker,
            Route::Profile,
        ]
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Dashboard => "/dashboard",
            Route::Coach => "/coach",
            Route::Progress => "/progress",
            Route::FormChecker => "/form-checker",
            Route::Profile => "/profile",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Dashboard => "Dashboard",
            Route::Coach => "AI Coach",
            Route::Progress => "Progress",
            Route::FormChecker => "Form Check",
            Route::Profile => "Profile",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Route::Home => "⌂",
            Route::Dashboard => "▦",
            Route::Coach => "💬",
            Route::Progress => "📈",
            Route::FormChecker => "🎥",
            Route::Profile => "👤",
        }
    }

    pub fn next(&self) -> Route {
        let all = Route::all();
        let idx = all.iter().position(|r| r == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn prev(&self) -> Route {
        let all = Route::all();
        let idx = all.iter().position(|r| r == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }

    /// Digit shortcut used outside the coach page, `1` through `6`.
    pub fn from_digit(ch: char) -> Option<Route> {
        let all = Route::all();
        ch.to_digit(10)
            .and_then(|d| usize::try_from(d).ok())
            .and_then(|d| d.checked_sub(1))
            .and_then(|idx| all.get(idx).copied())
    }
}

/// AI coach page state: the transcript plus the input buffer.
#[derive(Debug)]
pub struct CoachState {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    /// Replies scheduled but not yet landed, drives the typing indicator.
    pub pending_replies: usize,
}

impl CoachState {
    /// Transcript is seeded so it is never empty at mount.
    fn seeded(greeting: &str) -> Self {
        Self {
            messages: vec![ChatMessage::assistant(greeting, Local::now())],
            input: String::new(),
            pending_replies: 0,
        }
    }
}

/// Form checker page state. The generation counter invalidates in-flight
/// completion timers across stop/restart cycles.
#[derive(Debug, Default)]
pub struct FormCheckerState {
    pub phase: FormCheckPhase,
    generation: u64,
    timer: Option<TimerHandle>,
    /// When the current analysis started, drives the spinner frame.
    pub started_at: Option<Instant>,
}

impl FormCheckerState {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Dashboard page state: only the entrance-reveal clock.
#[derive(Debug, Default)]
pub struct DashboardState {
    entered_at: Option<Instant>,
}

impl DashboardState {
    /// How many stat cards are fully revealed at `now`. Cards not yet revealed
    /// still render (dimmed) — the reveal is cosmetic, never gating.
    pub fn revealed_cards(&self, now: Instant, total: usize) -> usize {
        match self.entered_at {
            None => total,
            Some(entered) => {
                let elapsed = now.saturating_duration_since(entered);
                let steps = (elapsed.as_millis() / CARD_REVEAL_STAGGER.as_millis()) as usize;
                (steps + 1).min(total)
            }
        }
    }
}

/// Single-owner application state. Each page's fields are only touched while
/// that page is current, except for timer delivery which re-validates first.
pub struct AppState {
    pub fixtures: Fixtures,
    pub current_route: Route,
    pub coach: CoachState,
    pub form_checker: FormCheckerState,
    pub dashboard: DashboardState,
    pub timers: TimerQueue,
    pub should_quit: bool,
    pub help_visible: bool,
}

impl AppState {
    pub fn new(fixtures: Fixtures) -> Self {
        let coach = CoachState::seeded(&fixtures.coach_greeting);
        Self {
            fixtures,
            current_route: Route::Home,
            coach,
            form_checker: FormCheckerState::default(),
            dashboard: DashboardState::default(),
            timers: TimerQueue::new(),
            should_quit: false,
            help_visible: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Switch pages. The outgoing page's timers are cancelled and its
    /// transient state is reset; the incoming page starts fresh.
    pub fn navigate_to(&mut self, route: Route, now: Instant) {
        if route == self.current_route {
            return;
        }
        info!(from = self.current_route.path(), to = route.path(), "navigate");

        self.timers.cancel_scope(self.current_route);
        match self.current_route {
            Route::Coach => {
                self.coach = CoachState::seeded(&self.fixtures.coach_greeting);
            }
            Route::FormChecker => {
                self.form_checker.phase = FormCheckPhase::Idle;
                self.form_checker.timer = None;
                self.form_checker.started_at = None;
            }
            Route::Dashboard => {
                self.dashboard.entered_at = None;
            }
            _ => {}
        }

        self.current_route = route;
        if route == Route::Dashboard {
            self.dashboard.entered_at = Some(now);
        }
    }

    pub fn next_route(&mut self, now: Instant) {
        self.navigate_to(self.current_route.next(), now);
    }

    pub fn prev_route(&mut self, now: Instant) {
        self.navigate_to(self.current_route.prev(), now);
    }

    // --- AI coach page -----------------------------------------------------

    pub fn coach_input_char(&mut self, ch: char) {
        self.coach.input.push(ch);
    }

    pub fn coach_backspace(&mut self) {
        self.coach.input.pop();
    }

    /// Append the typed message and schedule the canned reply. Blank input is
    /// silently ignored. Each send schedules its own independent timer, so
    /// replies land in completion order.
    pub fn send_message(&mut self, now: Instant) {
        let text = self.coach.input.trim().to_string();
        if text.is_empty() {
            debug!("ignoring blank coach message");
            return;
        }

        self.coach.messages.push(ChatMessage::user(text, Local::now()));
        self.coach.input.clear();
        self.coach.pending_replies += 1;
        self.timers
            .schedule(Route::Coach, COACH_REPLY_DELAY, TimerAction::CoachReply, now);
        debug!(pending = self.coach.pending_replies, "coach message sent");
    }

    // --- Form checker page -------------------------------------------------

    /// `Idle → Analyzing` (also restarts from `Complete`). Bumps the run
    /// generation and arms the completion timer.
    pub fn start_form_check(&mut self, now: Instant) {
        if self.form_checker.phase.is_analyzing() {
            return;
        }
        if let Some(handle) = self.form_checker.timer.take() {
            self.timers.cancel(handle);
        }

        self.form_checker.generation += 1;
        self.form_checker.phase = FormCheckPhase::Analyzing;
        self.form_checker.started_at = Some(now);
        let generation = self.form_checker.generation;
        self.form_checker.timer = Some(self.timers.schedule(
            Route::FormChecker,
            FORM_CHECK_DURATION,
            TimerAction::FormCheckComplete { generation },
            now,
        ));
        info!(generation, "form check started");
    }

    /// Back to `Idle` from any phase. Cancels the pending completion timer so
    /// a late callback cannot resurrect a stale transition.
    pub fn stop_form_check(&mut self) {
        if let Some(handle) = self.form_checker.timer.take() {
            self.timers.cancel(handle);
        }
        self.form_checker.phase = FormCheckPhase::Idle;
        self.form_checker.started_at = None;
        info!("form check stopped");
    }

    // --- Timer delivery ----------------------------------------------------

    /// Drive the timer queue. Called once per event-loop tick.
    pub fn tick(&mut self, now: Instant) {
        for action in self.timers.drain_due(now) {
            self.apply_timer_action(action);
        }
    }

    fn apply_timer_action(&mut self, action: TimerAction) {
        match action {
            TimerAction::CoachReply => {
                let reply = self.fixtures.coach_reply.clone();
                self.coach.messages.push(ChatMessage::assistant(reply, Local::now()));
                self.coach.pending_replies = self.coach.pending_replies.saturating_sub(1);
                debug!("coach reply delivered");
            }
            TimerAction::FormCheckComplete { generation } => {
                // Stale timers (stopped or restarted runs) must not apply.
                if self.form_checker.phase.is_analyzing()
                    && generation == self.form_checker.generation
                {
                    self.form_checker.phase = FormCheckPhase::Complete;
                    self.form_checker.timer = None;
                    info!(generation, "form check complete");
                } else {
                    debug!(generation, "ignoring stale form check timer");
                }
            }
        }
    }
}
