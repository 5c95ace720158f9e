mod index;

pub use index::{flip_point, ThresholdList};
