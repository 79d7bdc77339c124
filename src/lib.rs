//! Image carousel widget with autoplay, manual navigation and
//! pause-on-hover, plus a raylib front end to host it.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod error;
pub mod fade;
pub mod layout;
pub mod slide;
pub mod state;
pub mod texture_loader;
pub mod timer;
pub mod view;

pub use carousel::{Carousel, CarouselEvent, ListenerId};
pub use error::{CarouselError, Result};
pub use slide::{Slide, default_slides};
pub use state::Cause;
