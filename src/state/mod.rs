pub mod image_load;
pub mod pan;
pub mod placement;
pub mod selection;
pub mod touch;
pub mod viewport;

pub use image_load::ImageLoadTracker;
pub use pan::PanGesture;
pub use placement::{Corner, Handle, ImageLayer};
pub use selection::Selection;
pub use touch::PinchGesture;
pub use viewport::ViewportController;
