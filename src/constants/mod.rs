//! Static constants shared by bot features: gateway event names, thread
//! archive durations and canned replies.

mod events;
mod replies;

pub use events::{Event, ThreadArchiveTime, UnknownEvent};
pub use replies::{pick, ERROR_REPLIES, NEGATIVE_REPLIES, POSITIVE_REPLIES};
