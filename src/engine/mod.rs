//! Pure filtering, ordering and categorization over event snapshots
//!
//! Everything in this module is a synchronous, side-effect-free
//! transformation; running it twice over the same snapshot with the same
//! filters yields the same output.

pub mod buckets;
pub mod predicate;
pub mod sort;
