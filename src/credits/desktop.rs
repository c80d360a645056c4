use rand::rngs::StdRng;
use tracing::{info, trace};
use crate::constants::*;
use crate::credits::page::{Column, CreditPage};
use crate::credits::sequencer::PageSequencer;
use crate::credits::state::PageState;
use crate::credits::sprites::SpritePool;
use crate::desktop::{Desktop, Frame, InputEvent, Switch, draw_button};
use crate::error::AppError;
use crate::render::*;
use crate::texture_loader::ImageId;

pub const BACK_BUTTON: Rect = Rect::new(300, 550, 200, 22);

const HEADER_TITLE: Point = Point::new(400, 10);
const HEADER_SUBTITLE: Point = Point::new(400, 33);
const PAGE_TITLE: Point = Point::new(40, 100);
const LINES_LEFT: i32 = 60;
const LINES_TOP: i32 = 150;
const COLUMN_WIDTH: i32 = 350;
const IMAGE_RIGHT_OFFSET: i32 = 300;
const IMAGE_TOP: i32 = 70;

/// The credits screen: rotating pages over a crowd of walking figures.
pub struct CreditsDesktop {
    sequencer: PageSequencer,
    sprites: SpritePool,
    rng: StdRng,
    background: Option<ImageId>,
    page_state: PageState,
}

impl CreditsDesktop {
    pub fn new(pages: Vec<CreditPage>, background: Option<ImageId>, rng: StdRng, now: u64) -> Result<Self, AppError> {
        let sequencer = PageSequencer::new(pages, now)
            .ok_or_else(|| AppError::GameData("credits script has no pages".to_string()))?;
        info!("Credits ready with {} pages", sequencer.page_count());

        Ok(Self {
            sequencer,
            sprites: SpritePool::new(BACK_BUTTON.origin.y, now),
            rng,
            background,
            page_state: PageState::FadingIn,
        })
    }

    #[cfg(test)]
    pub fn sequencer(&self) -> &PageSequencer {
        &self.sequencer
    }

    #[cfg(test)]
    pub fn sprites(&self) -> &SpritePool {
        &self.sprites
    }

    fn draw_page(&self, canvas: &mut dyn Canvas, now: u64, viewport_width: i32) {
        let page = self.sequencer.current();
        let alpha = self.sequencer.opacity(now);

        canvas.draw_text(&page.title, PAGE_TITLE, Align::Left, LARGE_FONT_SIZE, set_alpha(COLOR_RED, alpha));

        let mut bottom = LINES_TOP;
        for column in [Column::Left, Column::Right] {
            let x = LINES_LEFT + column.index() as i32 * COLUMN_WIDTH;
            let mut y = LINES_TOP;
            for line in page.column(column) {
                canvas.draw_text(&line.text, Point::new(x, y), Align::Left, LARGE_FONT_SIZE, set_alpha(COLOR_YELLOW, alpha));
                y += LARGE_FONT_SIZE + LINE_GUTTER;
            }
            bottom = bottom.max(y);
        }

        if !page.last_line.is_empty() {
            let y = bottom + LAST_LINE_GAP;
            canvas.draw_text(
                &page.last_line,
                Point::new(PAGE_TITLE.x, y),
                Align::Left,
                LARGE_FONT_SIZE,
                set_alpha(COLOR_RED, alpha),
            );
        }

        if let Some(image) = page.image {
            canvas.draw_image(
                image,
                Point::new(viewport_width - IMAGE_RIGHT_OFFSET, IMAGE_TOP),
                set_alpha(COLOR_WHITE, alpha),
            );
        }
    }
}

impl Desktop for CreditsDesktop {
    fn activate(&mut self, now: u64) {
        self.sequencer.restart(now);
        self.sprites.reset_timers(now);
    }

    fn handle_input(&mut self, event: InputEvent, frame: &Frame) -> Option<Switch> {
        match event {
            InputEvent::LeftUp(p) if BACK_BUTTON.contains(p) => Some(Switch::MainMenu),
            InputEvent::KeyDown | InputEvent::LeftUp(_) => {
                self.sequencer.advance_forward(frame.now);
                None
            }
            InputEvent::RightUp(_) => {
                self.sequencer.advance_backward(frame.now);
                None
            }
            InputEvent::Close => Some(Switch::MainMenu),
        }
    }

    fn update(&mut self, frame: &Frame) {
        self.sequencer.tick(frame.now);
        let state = self.sequencer.state(frame.now);
        if state != self.page_state {
            trace!("Page {} {:?}", self.sequencer.current_index(), state);
            self.page_state = state;
        }
        self.sprites.try_spawn(frame.now, frame.width, frame.fps, &mut self.rng);
        self.sprites.tick(frame.now, frame.width);
    }

    fn draw(&self, canvas: &mut dyn Canvas, frame: &Frame) {
        canvas.draw_background(self.background);
        canvas.draw_text("Return To The Roots", HEADER_TITLE, Align::Center, LARGE_FONT_SIZE, COLOR_YELLOW);
        canvas.draw_text("Credits", HEADER_SUBTITLE, Align::Center, LARGE_FONT_SIZE, COLOR_YELLOW);
        draw_button(canvas, BACK_BUTTON, "Back");

        self.sprites.draw(canvas);
        self.draw_page(canvas, frame.now, frame.width);
    }
}
