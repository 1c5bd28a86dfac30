use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rollcall_runtime::{Instant, MemberList, MemberPagination, PageSizeOptions};
use std::time::Duration;

/// State of the interactive browser: the member view plus UI focus.
pub struct BrowseApp {
    members: MemberPagination,
    focus: MemberList,
    page_sizes: PageSizeOptions,
    should_quit: bool,
}

impl BrowseApp {
    pub fn new(members: MemberPagination, page_sizes: PageSizeOptions) -> Self {
        Self {
            members,
            focus: MemberList::Approved,
            page_sizes,
            should_quit: false,
        }
    }

    pub fn members(&self) -> &MemberPagination {
        &self.members
    }

    pub fn focus(&self) -> MemberList {
        self.focus
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// How long the event loop may block: until the filter deadline, capped at `idle`.
    pub fn poll_timeout(&self, now: Instant, idle: Duration) -> Duration {
        match self.members.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(idle),
            None => idle,
        }
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        self.members.tick(now)
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => self.should_quit = true,
            KeyCode::Char(_) if ctrl => {}
            KeyCode::Char(c) => {
                let mut text = self.members.filter_text().to_string();
                text.push(c);
                self.members.set_filter_text(text, now);
            }
            KeyCode::Backspace => {
                let mut text = self.members.filter_text().to_string();
                if text.pop().is_some() {
                    self.members.set_filter_text(text, now);
                }
            }
            KeyCode::Esc => self.members.clear_filter(now),
            KeyCode::Left | KeyCode::PageUp => self.members.go_to_previous(self.focus),
            KeyCode::Right | KeyCode::PageDown => self.members.go_to_next(self.focus),
            KeyCode::Up => self.cycle_page_size(true),
            KeyCode::Down => self.cycle_page_size(false),
            KeyCode::Home => self.members.go_to_first(self.focus),
            KeyCode::End => self.members.go_to_last(self.focus),
            KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.other(),
            _ => {}
        }
    }

    fn cycle_page_size(&mut self, forward: bool) {
        let current = self.members.page_size();
        let next = if forward {
            self.page_sizes.next_after(current)
        } else {
            self.page_sizes.previous_before(current)
        };
        if next != current {
            self.members.set_page_size(next);
        }
    }
}
