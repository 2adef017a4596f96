// seaplane
// A dynamically-typed scalar variant and a typed command-line option filler

#[cfg(test)]
mod test;

pub mod args;
pub mod diagnostics;
pub mod error;
pub mod log;
pub mod variant;

#[cfg(feature = "serde")]
pub mod serde;

pub use args::{ArgParser, OptionMap, ParseOption, SchemaBuilder, fill, parse_args};
pub use diagnostics::{BufferSink, DiagnosticSink, Reporter, SilentSink, StdoutSink};
pub use error::{ErrorKind, SeaplaneError, SeaplaneResult};
pub use variant::{FromVariant, ToUnderlying, Variant, VariantKind};
