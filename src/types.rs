//! Primitive Bridge API data types and NewType-patterns.

mod bridge_url;
mod enums;
mod strings;

pub use bridge_url::*;
pub use enums::*;
pub use strings::*;
