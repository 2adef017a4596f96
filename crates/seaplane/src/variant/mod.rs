// Variant module - the dynamically-typed scalar and its conversions
mod variant;
mod variant_convert;

pub use variant::{ToUnderlying, Variant, VariantKind};
pub use variant_convert::FromVariant;
