//! Crontab schedule and config line parser with explicit field expansion.
#![deny(unsafe_code, warnings, missing_docs)]

//! This is a tiny crate, intended to:
//! - parse a classic 5-field cron schedule pattern into the concrete sets of
//!   calendar values each field matches;
//! - parse a 6-field cron config line (schedule plus command) the same way.
//!
//! _This is not a cron jobs scheduler or runner._ Nothing here inspects the
//! clock or executes commands: the result of parsing is plain data owned by
//! the caller.
//!
//! ## Cron schedule format
//!
//! A schedule pattern has exactly five fields separated by single spaces; a
//! config line appends a sixth field with the command. The command is a
//! single field too, so commands with embedded spaces are not supported.
//!
//! The table below describes valid values and patterns of each field:
//!
//! | Field        | Allowed values | Allowed special characters |
//! |--------------|----------------|----------------------------|
//! | Minute       | 0-59           | * , - /                    |
//! | Hour         | 0-23           | * , - /                    |
//! | Day of Month | 1-31           | * , - /                    |
//! | Month        | 1-12           | * , - /                    |
//! | Day of Week  | 0-6            | * , - /                    |
//!
//! Patterns meanings:
//! - `*` - each possible value, i.e. `0,1,2,...,59` for minutes;
//! - `,` - list of values or patterns, i.e. `1,7,12`, `*/15,7,13-16`;
//! - `-` - range of values, i.e. `5-10` for `5,6,7,8,9,10`;
//! - `/` - repeating values, i.e. `*/15`, `3/11`; the start of `*` stands
//!   for the literal 0, and the repetition runs while it stays within the
//!   field maximum.
//!
//! Each field expands to an ascending, deduplicated value set. Fields are
//! independent: no cross-field date feasibility is checked, so `0 0 31 2 *`
//! is a valid pattern. Parsing stops at the first invalid field and returns
//! one of the [`Error`] values describing exactly what was wrong.
//!
//! ## How to use
//!
//! The crate exposes two entities: [`Pattern`] for 5-field schedule text and
//! [`Config`] for full 6-field config lines, each with a parsing constructor
//! (`new`) and the usual `try_from`/`from_str` conversions.
//!
//! ### Example with `Pattern`
//! ```rust
//! use cron_expand::{Pattern, Result};
//!
//! fn pattern() -> Result<()> {
//!     let pattern = Pattern::new("*/15,7,13-16 0 1 1 0")?;
//!
//!     assert_eq!(pattern.minutes(), &[0, 7, 13, 14, 15, 16, 30, 45]);
//!     assert_eq!(pattern.hours(), &[0]);
//!
//!     Ok(())
//! }
//! # pattern().unwrap();
//! ```
//!
//! ### Example with `Config`
//! ```rust
//! use cron_expand::{Config, Result};
//!
//! fn config() -> Result<()> {
//!     let config = Config::new("*/15 0 1,15 * 1-5 /usr/bin/find")?;
//!
//!     assert_eq!(config.pattern().minutes(), &[0, 15, 30, 45]);
//!     assert_eq!(config.command(), "/usr/bin/find");
//!
//!     // One labeled line per field, values space separated
//!     println!("{config}");
//!
//!     Ok(())
//! }
//! # config().unwrap();
//! ```
//!
//! # Feature flags
//! * `serde`: adds [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html)
//!   and [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html)
//!   trait implementations for [`Pattern`] and [`Config`].

/// Crate specific Error implementation.
pub mod error;
mod field;
/// Cron schedule pattern and config line parser.
pub mod schedule;
mod series;

// Re-export of public entities.
pub use error::Error;
pub use schedule::{Config, Pattern};

/// Convenient alias for `Result`.
pub type Result<T, E = Error> = std::result::Result<T, E>;
