#![doc = "OpenSwing public API"]
mod battleground;
mod label;
mod swingometer;
mod threshold;
mod types;

pub mod io;

#[doc(inline)]
pub use types::{CurrentResult, CurrentResults, District, Dot, Dot3, Party, Rgb, SeatFilter};

#[doc(inline)]
pub use threshold::{flip_point, ThresholdList};

#[doc(inline)]
pub use swingometer::{Swingometer, SwingometerOptions, SwingometerOutput};

#[doc(inline)]
pub use battleground::{
    calculate_line, calculate_swing, tie_point, Battleground, BattlegroundOptions, BattlegroundOutput,
    Line, ShareRow, ShareTable, DEFAULT_BUCKET_SIZE, MAX_LINE_STEPS, SHARE_TRANSFER_RATE, UNTRACKED_RIVAL_PENALTY,
};

#[doc(inline)]
pub use label::{filter_nearby, Label, DEFAULT_LABEL_TOLERANCE};
