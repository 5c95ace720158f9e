mod projector;

pub use projector::{Swingometer, SwingometerOptions, SwingometerOutput};
