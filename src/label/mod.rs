mod placer;

pub use placer::{filter_nearby, Label, DEFAULT_LABEL_TOLERANCE};
