mod color;
mod district;
mod dot;
mod party;

pub use color::Rgb;
pub use district::{CurrentResult, CurrentResults, District, SeatFilter};
pub use dot::{Dot, Dot3};
pub use party::Party;

pub(crate) use district::{current_color, in_focus};
