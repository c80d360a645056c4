pub const RENDER_WIDTH: i32 = 800;            // Default width of the render texture
pub const RENDER_HEIGHT: i32 = 600;           // Default height of the render texture
pub const FPS: u32 = 60;                      // Default target frames per second

pub const PAGE_DURATION: u64 = 12_900;        // Time each credits page stays up (ms)
pub const FADE_DURATION: u64 = 2_000;         // Fade in / fade out time of a page (ms)

pub const LARGE_FONT_SIZE: i32 = 20;          // Font size for titles and credit lines
pub const NORMAL_FONT_SIZE: i32 = 14;         // Font size for buttons
pub const LINE_GUTTER: i32 = 5;               // Extra space between two credit lines
pub const LAST_LINE_GAP: i32 = 20;            // Space above the trailing line of a page

pub const SPRITE_STEPS_PER_SEC: u64 = 25;     // Walking animation steps per second
pub const SPRITE_FRAMES: u8 = 8;              // Frames in one walking cycle
pub const SPRITE_BASE_CAPACITY: usize = 50;   // Sprites allowed on top of half the viewport width
pub const SPRITE_BAND_HEIGHT: i32 = 150;      // Height of the band sprites walk in
pub const SPRITE_BAND_GAP: i32 = 20;          // Space between the band and the back button
pub const SPRITE_CELL: i32 = 32;              // Cell size of the sprite sheets (px)
