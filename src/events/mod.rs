mod controls;
mod view;

pub use controls::wire_controls;
pub use view::{wire_canvas_wheel, wire_window_resize};
