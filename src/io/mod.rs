mod csv;
mod json;
mod parties;

pub use csv::{parse_results, parse_votes, read_results, read_seat_filter, read_votes};
pub use json::{to_json_string, write_json};
pub use parties::{parse_parties, read_parties, PartyConfig, PartyRegistry};
