//! Hero image slider with its page-level companions (notices, tabs,
//! navigation, shared fragments). State models are headless; the raylib
//! window lives behind the `window` feature.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod layer;
pub mod markup;
pub mod notices;
pub mod site;
pub mod slide;
pub mod slider;
pub mod state;
pub mod timer;
pub mod tween;

#[cfg(feature = "window")]
pub mod engine;
#[cfg(feature = "window")]
pub mod render;
#[cfg(feature = "window")]
pub mod texture_loader;

pub use error::{HeroError, Result};
pub use markup::HeroMarkup;
pub use slide::Slide;
pub use slider::{HeroSlider, HeroText, SliderConfig};
