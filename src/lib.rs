#![forbid(unsafe_code)]
#![warn(clippy::all, rust_2018_idioms)]

mod app;
pub mod clock;
pub mod drag;
pub mod sound;
pub mod ticker;

pub use app::{native_options, ClockApp, WINDOW_SIZE, WINDOW_TITLE};
pub use clock::{compute_angle, ClockFace, HandAngles, HandUnit, Primitive};
pub use drag::DragController;
pub use sound::TickSound;
pub use ticker::{RepaintSink, RepaintTicker, TICK_PERIOD};
