//! Adaptor types for sequences.
mod take;
pub use take::{take, Take, TakeCursor};
