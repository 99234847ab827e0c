//! Best-match resolution between variants.
//!
//! [`BestMatchResolver`] implements [`VariantMatcher`]; [`Selection`] keeps
//! the caller's current variant id and applies resolver output to it.

mod resolver;
mod selection;
mod traits;

pub use resolver::{resolve, BestMatchResolver};
pub use selection::Selection;
pub use traits::{BestMatch, SelectionChange, VariantMatcher};
