//! Small DSL for describing a change to a point in time, plus the engine
//! that applies a parsed change to a Unix timestamp.
//!
//! A change token is a run of `<quantity><unit-tag>` pairs, optionally led by
//! a sign: `"45s"` overrides the seconds field, `"-1h15m10s"` subtracts one
//! hour, fifteen minutes and ten seconds. Parsing and applying are pure
//! functions over their inputs; calendar arithmetic (carry, month lengths,
//! leap years) is delegated to `chrono`, pinned to UTC.
//!
//! ```
//! use time_change::Change;
//!
//! // 2020-08-20 12:34:45 UTC
//! let base: i64 = 1597926885;
//! let change: Change = "-1h15m10s".parse().unwrap();
//! // 2020-08-20 11:19:35 UTC
//! assert_eq!(change.apply(base), 1597922375);
//! ```

mod core;
pub mod parse;
pub mod types;

pub use crate::parse::from_token;
pub use crate::types::change::{Change, ChangeMode};
pub use crate::types::errors::ChangeParseError;
pub use crate::types::unit::{Unit, UnitSet};
