//! Page-level helpers that sit around the hero: navigation, tabs,
//! initial scroll position and shared header/footer fragments.

pub mod include;
pub mod nav;
pub mod scroll;
pub mod tabs;

pub use include::{inject_fragments, FOOTER_MOUNT, HEADER_MOUNT};
pub use nav::{HeaderBar, NavMenu};
pub use scroll::ScrollNormalizer;
pub use tabs::TabSwitcher;
