use std::time::Duration;

pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second

pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(5000); // Time between automatic slide changes
pub const TRANSITION_DURATION: Duration = Duration::from_millis(700);    // Layer slide + fade
pub const COMPLETION_FALLBACK: Duration = Duration::from_millis(900);    // Completes a transition whose end signal got lost

pub const HEADER_SCROLL_THRESHOLD: f32 = 24.0; // Header turns "scrolled" past this offset (px)
pub const HEADER_HEIGHT: f32 = 80.0;           // Fixed header height used when scrolling to an anchor (px)
