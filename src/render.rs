use raylib::prelude::*;
use crate::constants::*;
use crate::texture_loader::{Assets, ImageId};

pub const COLOR_WHITE: u32 = 0xFFFF_FFFF;
pub const COLOR_YELLOW: u32 = 0xFFFF_FF00;
pub const COLOR_RED: u32 = 0xFFFF_0000;
pub const COLOR_BUTTON: u32 = 0xFF6B_1E12;
pub const COLOR_BACKDROP: u32 = 0xFF1C_140C;

/// Replaces the alpha channel of an `0xAARRGGBB` color.
pub fn set_alpha(color: u32, alpha: u8) -> u32 {
    (color & 0x00FF_FFFF) | (u32::from(alpha) << 24)
}

fn to_raylib(argb: u32) -> Color {
    Color::new((argb >> 16) as u8, (argb >> 8) as u8, argb as u8, (argb >> 24) as u8)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub origin: Point,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { origin: Point::new(x, y), width, height }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.origin.x
            && p.y >= self.origin.y
            && p.x < self.origin.x + self.width
            && p.y < self.origin.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.origin.x + self.width / 2, self.origin.y + self.height / 2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteSheet {
    Jobs,
    Carrier,
}

/// Everything the driver needs to put one walking figure on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteDraw {
    pub sheet: SpriteSheet,
    pub id: u16,
    pub direction: Direction,
    pub fat: bool,
    pub frame: u8,
    pub pos: Point,
    pub color: u32,
}

/// Drawing primitives a desktop is allowed to use.
pub trait Canvas {
    fn text_width(&self, text: &str, size: i32) -> i32;
    fn draw_text(&mut self, text: &str, at: Point, align: Align, size: i32, color: u32);
    fn fill_rect(&mut self, rect: Rect, color: u32);
    fn draw_sprite(&mut self, sprite: &SpriteDraw);
    fn draw_image(&mut self, image: ImageId, at: Point, color: u32);
    /// Stretches `image` over the viewport, or clears it when there is none.
    fn draw_background(&mut self, image: Option<ImageId>);
}

pub struct RaylibCanvas<'a, D: RaylibDraw> {
    d: &'a mut D,
    assets: &'a Assets,
    width: i32,
    height: i32,
}

impl<'a, D: RaylibDraw> RaylibCanvas<'a, D> {
    pub fn new(d: &'a mut D, assets: &'a Assets, width: i32, height: i32) -> Self {
        Self { d, assets, width, height }
    }

    // Used when the sprite sheets are not installed
    fn draw_stick_figure(&mut self, sprite: &SpriteDraw) {
        let Point { x, y } = sprite.pos;
        let color = to_raylib(sprite.color);
        let stride = if sprite.frame % 2 == 0 { 3 } else { -3 };
        let facing = match sprite.direction {
            Direction::LeftToRight => 1,
            Direction::RightToLeft => -1,
        };

        self.d.draw_line(x, y - 9, x + stride, y, Color::BLACK);
        self.d.draw_line(x, y - 9, x - stride, y, Color::BLACK);
        let body = if sprite.fat { 8 } else { 6 };
        self.d.draw_rectangle(x - body / 2, y - 19, body, 10, color);
        self.d.draw_circle(x + facing, y - 22, 3.0, Color::BEIGE);

        if sprite.sheet == SpriteSheet::Carrier {
            self.d.draw_rectangle(x - 4, y - 30, 8, 5, Color::BROWN);
        }
    }
}

impl<D: RaylibDraw> Canvas for RaylibCanvas<'_, D> {
    fn text_width(&self, text: &str, size: i32) -> i32 {
        // raylib 5.5 only exposes measure_text on RaylibHandle; call the same FFI function it wraps
        let c_text = std::ffi::CString::new(text).unwrap();
        unsafe { raylib::ffi::MeasureText(c_text.as_ptr(), size) }
    }

    fn draw_text(&mut self, text: &str, at: Point, align: Align, size: i32, color: u32) {
        let x = match align {
            Align::Left => at.x,
            Align::Center => at.x - self.text_width(text, size) / 2,
        };
        self.d.draw_text(text, x, at.y, size, to_raylib(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: u32) {
        self.d.draw_rectangle(rect.origin.x, rect.origin.y, rect.width, rect.height, to_raylib(color));
    }

    fn draw_sprite(&mut self, sprite: &SpriteDraw) {
        let sheet = match sprite.sheet {
            SpriteSheet::Jobs => self.assets.jobs_sheet(),
            SpriteSheet::Carrier => self.assets.carrier_sheet(),
        };

        let Some(texture) = sheet else {
            self.draw_stick_figure(sprite);
            return;
        };

        let column = match sprite.direction {
            Direction::LeftToRight => 0,
            Direction::RightToLeft => 1,
        } * SPRITE_FRAMES as i32 + sprite.frame as i32;

        // Sheets are anchored at the figure's feet
        self.d.draw_texture_rec(
            texture,
            Rectangle::new(
                (column * SPRITE_CELL) as f32,
                (sprite.id as i32 * SPRITE_CELL) as f32,
                SPRITE_CELL as f32,
                SPRITE_CELL as f32,
            ),
            Vector2::new((sprite.pos.x - SPRITE_CELL / 2) as f32, (sprite.pos.y - SPRITE_CELL) as f32),
            to_raylib(sprite.color),
        );
    }

    fn draw_image(&mut self, image: ImageId, at: Point, color: u32) {
        if let Some(texture) = self.assets.texture(image) {
            self.d.draw_texture(texture, at.x, at.y, to_raylib(color));
        }
    }

    fn draw_background(&mut self, image: Option<ImageId>) {
        self.d.clear_background(to_raylib(COLOR_BACKDROP));

        if let Some(texture) = image.and_then(|id| self.assets.texture(id)) {
            self.d.draw_texture_pro(
                texture,
                Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32),
                Rectangle::new(0.0, 0.0, self.width as f32, self.height as f32),
                Vector2::new(0.0, 0.0),
                0.0,
                Color::WHITE,
            );
        }
    }
}

/// Canvas that remembers every call, for layout tests.
#[cfg(test)]
pub mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Text { text: String, at: Point, align: Align, color: u32 },
        Rect(Rect, u32),
        Sprite(SpriteDraw),
        Image(ImageId, Point, u32),
        Background(Option<ImageId>),
    }

    pub struct RecordingCanvas {
        pub width: i32,
        pub height: i32,
        pub calls: Vec<Call>,
    }

    impl RecordingCanvas {
        pub fn new(width: i32, height: i32) -> Self {
            Self { width, height, calls: Vec::new() }
        }

        pub fn texts(&self) -> Vec<(&str, Point, u32)> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    Call::Text { text, at, color, .. } => Some((text.as_str(), *at, *color)),
                    _ => None,
                })
                .collect()
        }

        pub fn sprites(&self) -> Vec<SpriteDraw> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    Call::Sprite(s) => Some(*s),
                    _ => None,
                })
                .collect()
        }
    }

    impl Canvas for RecordingCanvas {
        fn text_width(&self, text: &str, size: i32) -> i32 {
            text.chars().count() as i32 * size / 2
        }

        fn draw_text(&mut self, text: &str, at: Point, align: Align, _size: i32, color: u32) {
            self.calls.push(Call::Text { text: text.to_string(), at, align, color });
        }

        fn fill_rect(&mut self, rect: Rect, color: u32) {
            self.calls.push(Call::Rect(rect, color));
        }

        fn draw_sprite(&mut self, sprite: &SpriteDraw) {
            self.calls.push(Call::Sprite(*sprite));
        }

        fn draw_image(&mut self, image: ImageId, at: Point, color: u32) {
            self.calls.push(Call::Image(image, at, color));
        }

        fn draw_background(&mut self, image: Option<ImageId>) {
            self.calls.push(Call::Background(image));
        }
    }
}
