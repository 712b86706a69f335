pub mod canvas_png;
pub mod report;

pub use canvas_png::{encode_canvas_png, write_canvas_png};
pub use report::{Dimensions, DiffReport};
