//! Structs describing Bridge API request and response payloads.
//!
//! Everything here is a self-contained value object: construct it, send it,
//! or get it back from a client call. Validation beyond field types (weight
//! totals, cron syntax, date ranges) happens server-side.

mod holders;
mod schedules;
mod studies;
mod surveys;

pub use holders::*;
pub use schedules::*;
pub use studies::*;
pub use surveys::*;
