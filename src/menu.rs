use tracing::debug;
use crate::constants::*;
use crate::desktop::{Desktop, Frame, InputEvent, Switch, draw_button};
use crate::render::*;
use crate::texture_loader::ImageId;

pub const CREDITS_BUTTON: Rect = Rect::new(300, 300, 200, 22);
pub const QUIT_BUTTON: Rect = Rect::new(300, 340, 200, 22);

/// Entry screen. Leads to the credits or out of the program.
pub struct MainMenuDesktop {
    background: Option<ImageId>,
    description: String,
}

impl MainMenuDesktop {
    pub fn new(background: Option<ImageId>, description: String) -> Self {
        Self { background, description }
    }
}

impl Desktop for MainMenuDesktop {
    fn activate(&mut self, now: u64) {
        debug!("Main menu shown at {} ms", now);
    }

    fn handle_input(&mut self, event: InputEvent, _frame: &Frame) -> Option<Switch> {
        match event {
            InputEvent::LeftUp(p) if CREDITS_BUTTON.contains(p) => Some(Switch::Credits),
            InputEvent::LeftUp(p) if QUIT_BUTTON.contains(p) => Some(Switch::Quit),
            InputEvent::Close => Some(Switch::Quit),
            _ => None,
        }
    }

    fn update(&mut self, _frame: &Frame) {}

    fn draw(&self, canvas: &mut dyn Canvas, frame: &Frame) {
        canvas.draw_background(self.background);
        canvas.draw_text("Return To The Roots", Point::new(400, 10), Align::Center, LARGE_FONT_SIZE, COLOR_YELLOW);
        draw_button(canvas, CREDITS_BUTTON, "Credits");
        draw_button(canvas, QUIT_BUTTON, "Quit");
        canvas.draw_text(
            &self.description,
            Point::new(10, frame.height - NORMAL_FONT_SIZE - 4),
            Align::Left,
            NORMAL_FONT_SIZE,
            COLOR_WHITE,
        );
    }
}
