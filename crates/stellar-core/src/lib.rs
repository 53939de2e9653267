//! Platform-free core of the stellar evolution explorer.
//!
//! Classification, naming and per-frame procedural drawing live here so they
//! can be exercised on the host. The web front-end only supplies a [`Canvas`]
//! implementation, a [`FrameScheduler`] and the raw slider values.

pub mod animation;
pub mod background;
pub mod canvas;
pub mod catalog;
pub mod classify;
pub mod color;
pub mod constants;
pub mod controller;
pub mod error;
pub mod naming;
pub mod render;
pub mod report;
pub mod zoom;

pub use animation::*;
pub use background::*;
pub use canvas::*;
pub use catalog::*;
pub use classify::*;
pub use color::*;
pub use constants::*;
pub use controller::*;
pub use error::*;
pub use naming::*;
pub use render::*;
pub use report::*;
pub use zoom::*;
