//! Search engine module
//!
//! Defines the Engine trait and the Google Custom Search implementation.

mod traits;

pub mod google;

pub use google::GoogleCse;
pub use traits::*;
