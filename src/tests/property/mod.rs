//! Property-based tests for LifeWappen
//!
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Running Property Tests
//!
//! ```sh
//! cargo test property --release
//! ```
//!
//! ## Test Modules
//!
//! - `profile_props`: badge unlocks and attributes
//!   - Final attributes do not depend on unlock order
//!   - Repeating an unlock changes nothing
//!   - The log grows by exactly one entry per new unlock
//!   - Saving and loading preserves attributes, unlocks and the log
//!
//! - `width_props`: display width measurement
//!   - `k` wide and `m` narrow characters measure `2k + m`
//!   - Escape sequences never change the measured width
//!   - Padding always lands on the target width
//!
//! By default, proptest runs 256 cases per property; set `PROPTEST_CASES` to
//! change that.

mod profile_props;
mod width_props;
