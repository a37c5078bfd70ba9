// Chat events — the message shape handed to us by the event source, plus
// loading and per-location grouping helpers.

pub mod chatrooms;
pub mod load;
pub mod message;
