use crate::constants::NORMAL_FONT_SIZE;
use crate::render::{Align, COLOR_BUTTON, COLOR_YELLOW, Canvas, Point, Rect};

/// What the driver knows about the frame being produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Monotonic clock in milliseconds.
    pub now: u64,
    /// Measured frame rate.
    pub fps: u32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown,
    LeftUp(Point),
    RightUp(Point),
    /// The user asked to leave the screen (Escape).
    Close,
}

/// Screen change requested by a desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switch {
    MainMenu,
    Credits,
    Quit,
}

/// A full-window screen driven by the frame loop.
pub trait Desktop {
    /// Called when the desktop becomes the active screen.
    fn activate(&mut self, now: u64);
    fn handle_input(&mut self, event: InputEvent, frame: &Frame) -> Option<Switch>;
    fn update(&mut self, frame: &Frame);
    fn draw(&self, canvas: &mut dyn Canvas, frame: &Frame);
}

/// Draws a flat text button.
pub fn draw_button(canvas: &mut dyn Canvas, rect: Rect, label: &str) {
    canvas.fill_rect(rect, COLOR_BUTTON);
    let center = rect.center();
    canvas.draw_text(
        label,
        Point::new(center.x, center.y - NORMAL_FONT_SIZE / 2),
        Align::Center,
        NORMAL_FONT_SIZE,
        COLOR_YELLOW,
    );
}
