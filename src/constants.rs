pub const WINDOW_WIDTH: i32 = 960;             // Default window width
pub const WINDOW_HEIGHT: i32 = 540;            // Default window height
pub const FPS: u32 = 60;                       // Target frames per second

pub const AUTOPLAY_INTERVAL_MS: u64 = 5000;    // Time between automatic advances (milliseconds)
pub const FADE_DURATION_MS: u64 = 600;         // Cross-fade between outgoing and incoming slide (milliseconds)

pub const VIEWPORT_MARGIN: f32 = 24.0;         // Space between window edge and widget region
pub const ARROW_WIDTH: f32 = 48.0;             // Width of the previous/next click regions
pub const ARROW_HEIGHT: f32 = 96.0;            // Height of the previous/next click regions
pub const INDICATOR_RADIUS: f32 = 7.0;         // Radius of an indicator dot
pub const INDICATOR_SPACING: f32 = 24.0;       // Distance between indicator centers
pub const INDICATOR_BOTTOM_OFFSET: f32 = 28.0; // Indicator row distance from viewport bottom
pub const SLIDE_FILL_RATIO: f32 = 0.9;         // Max share of the viewport a slide may cover
pub const CAPTION_FONT_SIZE: i32 = 20;
