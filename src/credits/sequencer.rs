use tracing::debug;
use crate::constants::*;
use crate::credits::page::CreditPage;
use crate::credits::state::PageState;

/// Cyclic list of credits pages with the time the current one came up.
pub struct PageSequencer {
    pages: Vec<CreditPage>,
    current: usize,
    page_start: u64,
}

impl PageSequencer {
    /// Starts on the first page at `now`. Returns `None` for an empty list.
    pub fn new(pages: Vec<CreditPage>, now: u64) -> Option<Self> {
        if pages.is_empty() {
            return None;
        }
        Some(Self { pages, current: 0, page_start: now })
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &CreditPage {
        &self.pages[self.current]
    }

    /// Restarts the timer of the current page.
    pub fn restart(&mut self, now: u64) {
        self.page_start = now;
    }

    pub fn advance_forward(&mut self, now: u64) {
        self.current = (self.current + 1) % self.pages.len();
        self.page_start = now;
        debug!("Credits page {}/{}", self.current + 1, self.pages.len());
    }

    pub fn advance_backward(&mut self, now: u64) {
        self.current = (self.current + self.pages.len() - 1) % self.pages.len();
        self.page_start = now;
        debug!("Credits page {}/{}", self.current + 1, self.pages.len());
    }

    fn elapsed(&self, now: u64) -> u64 {
        now.saturating_sub(self.page_start)
    }

    /// Turns the page once its time is up. Returns whether it did.
    pub fn tick(&mut self, now: u64) -> bool {
        if self.elapsed(now) > PAGE_DURATION {
            self.advance_forward(now);
            return true;
        }
        false
    }

    /// Alpha of the page text at `now`.
    pub fn opacity(&self, now: u64) -> u8 {
        opacity_at(self.elapsed(now))
    }

    pub fn state(&self, now: u64) -> PageState {
        let elapsed = self.elapsed(now);
        // Same precedence as the opacity: fading out wins over fading in
        if elapsed > PAGE_DURATION - FADE_DURATION {
            PageState::FadingOut
        } else if elapsed < FADE_DURATION {
            PageState::FadingIn
        } else {
            PageState::Steady
        }
    }
}

/// Opacity after `elapsed` ms on a page.
pub fn opacity_at(elapsed: u64) -> u8 {
    let mut alpha = 0xFF;
    if elapsed < FADE_DURATION {
        alpha = 0xFF * elapsed / FADE_DURATION;
    }
    if elapsed > PAGE_DURATION - FADE_DURATION {
        let into_fade = elapsed.min(PAGE_DURATION) - (PAGE_DURATION - FADE_DURATION);
        alpha = 0xFF - 0xFF * into_fade / FADE_DURATION;
    }
    alpha as u8
}
