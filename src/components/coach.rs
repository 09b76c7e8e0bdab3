// ABOUTME: AI coach chat page with transcript, typing indicator, and input bar

use crate::app::state::AppState;
use crate::models::{ChatMessage, ChatRole};
use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

const USER_FG: Color = Color::Rgb(100, 200, 100);
const COACH_FG: Color = Color::Rgb(100, 149, 237);
const MUTED: Color = Color::Rgb(120, 120, 140);

pub struct CoachComponent {
    scroll_offset: usize,
    max_visible_messages: usize,
}

impl CoachComponent {
    pub fn new() -> Self {
        Self {
            scroll_offset: 0,
            max_visible_messages: 10,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Transcript
                Constraint::Length(3), // Input bar
            ])
            .split(area);

        self.update_max_visible(chunks[0].height);
        self.auto_scroll(state.coach.messages.len());
        self.render_messages(frame, chunks[0], state);
        self.render_input(frame, chunks[1], state);
    }

    fn render_messages(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" AI Coach ")
            .title_style(Style::default().fg(COACH_FG).add_modifier(Modifier::BOLD));

        let mut items: Vec<ListItem> = state
            .coach
            .messages
            .iter()
            .skip(self.scroll_offset)
            .take(self.max_visible_messages)
            .map(Self::format_message)
            .collect();

        if state.coach.pending_replies > 0 {
            items.push(
                ListItem::new("🤖 Coach is typing...")
                    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC)),
            );
        }

        frame.render_widget(List::new(items).block(block), area);

        // Scroll position hint when the transcript overflows.
        let total = state.coach.messages.len();
        if total > self.max_visible_messages {
            let info = format!(
                " {}-{}/{} ",
                self.scroll_offset + 1,
                (self.scroll_offset + self.max_visible_messages).min(total),
                total
            );
            let info_width = info.len() as u16;
            if area.width > info_width + 1 {
                let hint_area = Rect {
                    x: area.x + area.width - info_width - 1,
                    y: area.y,
                    width: info_width,
                    height: 1,
                };
                frame.render_widget(
                    Paragraph::new(info).style(Style::default().fg(MUTED)),
                    hint_area,
                );
            }
        }
    }

    fn format_message(message: &ChatMessage) -> ListItem {
        let color = match message.role {
            ChatRole::User => USER_FG,
            ChatRole::Assistant => COACH_FG,
        };
        let formatted = format!(
            "[{}] {} {}",
            message.timestamp.format("%H:%M:%S"),
            message.role.icon(),
            message.content
        );
        ListItem::new(formatted).style(Style::default().fg(color))
    }

    fn render_input(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let input = &state.coach.input;
        let display = if input.is_empty() {
            "Ask me anything about fitness, nutrition, or your training...".to_string()
        } else {
            format!("{input}█")
        };
        let style = if input.is_empty() {
            Style::default().fg(MUTED)
        } else {
            Style::default().fg(Color::White)
        };

        let bar = Paragraph::new(display)
            .style(style)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Type your message (Enter to send) ")
                    .title_style(Style::default().fg(MUTED)),
            );
        frame.render_widget(bar, area);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self, total_messages: usize) {
        if self.scroll_offset + self.max_visible_messages < total_messages {
            self.scroll_offset += 1;
        }
    }

    pub fn scroll_to_bottom(&mut self, total_messages: usize) {
        self.scroll_offset = total_messages.saturating_sub(self.max_visible_messages);
    }

    /// Follow new messages unless the user has scrolled well away from the
    /// bottom of the transcript.
    pub fn auto_scroll(&mut self, total_messages: usize) {
        let near_bottom = self.scroll_offset + self.max_visible_messages + 2 >= total_messages;
        if near_bottom {
            self.scroll_to_bottom(total_messages);
        }
    }

    /// Reset scroll when the transcript is torn down (page navigation).
    pub fn reset(&mut self) {
        self.scroll_offset = 0;
    }

    fn update_max_visible(&mut self, area_height: u16) {
        // Account for borders and the typing indicator row.
        self.max_visible_messages = (area_height as usize).saturating_sub(3).max(3);
    }
}

impl Default for CoachComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_scroll_follows_latest_when_near_bottom() {
        let mut coach = CoachComponent::new();
        coach.max_visible_messages = 5;

        coach.auto_scroll(20);
        assert_eq!(coach.scroll_offset, 15);
    }

    #[test]
    fn test_auto_scroll_respects_manual_scrollback() {
        let mut coach = CoachComponent::new();
        coach.max_visible_messages = 5;
        coach.scroll_offset = 2;

        // Far from the bottom of a 20-message transcript: stay put.
        coach.auto_scroll(20);
        assert_eq!(coach.scroll_offset, 2);
    }

    #[test]
    fn test_scroll_bounds() {
        let mut coach = CoachComponent::new();
        coach.max_visible_messages = 5;

        coach.scroll_up();
        assert_eq!(coach.scroll_offset, 0);

        coach.scroll_down(4);
        assert_eq!(coach.scroll_offset, 0);

        coach.scroll_down(10);
        assert_eq!(coach.scroll_offset, 1);
    }
}
