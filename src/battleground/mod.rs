mod line;
mod projector;
mod shares;
mod swing;

pub use line::{calculate_line, Line, DEFAULT_BUCKET_SIZE, MAX_LINE_STEPS};
pub use projector::{tie_point, Battleground, BattlegroundOptions, BattlegroundOutput};
pub use shares::{ShareRow, ShareTable};
pub use swing::{calculate_swing, SHARE_TRANSFER_RATE, UNTRACKED_RIVAL_PENALTY};
