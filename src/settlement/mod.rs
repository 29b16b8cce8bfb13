//! Settlement engine
//!
//! Pure calculations over an event snapshot:
//! - `compute_summary` derives paid / owed / net balances per participant
//! - `resolve_settlements` nets those balances into point-to-point transfers
//!
//! Neither function fails, performs I/O or keeps state between calls.

mod balance_calculator;
mod resolver;

pub use balance_calculator::compute_summary;
pub use resolver::resolve_settlements;
