pub mod constants;
pub mod controller;
pub mod easing;
pub mod fab;
pub mod keys;
pub mod orbit;
pub mod pages;
pub mod reveal;
pub mod scroll;
pub mod stats;
pub mod timeline;
pub mod tween;

pub use controller::*;
pub use easing::Ease;
pub use fab::*;
pub use keys::*;
pub use orbit::*;
pub use pages::*;
pub use reveal::*;
pub use stats::*;
pub use timeline::*;
pub use tween::*;
