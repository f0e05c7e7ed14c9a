pub mod convolve;
pub mod firdes;
pub mod window;

pub use convolve::convolve;
pub use firdes::{FilterType, design_filter};
pub use window::WindowType;
