//! Common-prefix and common-substring search over lists of strings, and the
//! path label shortener built on top of them.
//!
//! Everything here is pure: no I/O, no shared state, inputs are only borrowed.

pub mod lcs;
pub mod prefix;
pub mod shorten;
pub mod window;

pub use lcs::{PATH_SEPARATORS, common_substring};
pub use prefix::common_prefix;
pub use shorten::{ELLIPSIS, shorten, shorten_window};
pub use window::Limit;
