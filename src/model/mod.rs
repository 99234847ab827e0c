//! Data model for screenshot variants.
//!
//! Raw records are converted once into [`VariantRecord`]s, flattened into
//! [`FlatMetadata`] by the normalizer, and grouped into a [`VariantSet`] for
//! analysis and best-match resolution.
//!
//! ```ignore
//! let records = parse_variants(&path)?;
//! let set = VariantSet::build(&records);
//!
//! for variant in &set {
//!     println!("{:?}: {:?}", variant.id, variant.value("browser"));
//! }
//! ```

mod index;
mod metadata;
mod record;
mod value;

pub use index::*;
pub use metadata::*;
pub use record::*;
pub use value::*;
