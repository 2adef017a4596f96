// Command-line option filler
//
// Token grammar:
//   -name          enable a Boolean option
//   +name          disable a Boolean option
//   -name value    set an Integer / Real / Text option
//
// The defaults table doubles as the schema: the kind of each default fixes
// how the value token of that option is parsed. Leading spaces of a token are
// ignored, trailing and inner ones are not.
mod parse_number;
mod schema_builder;

use ahash::RandomState;
use std::collections::HashMap;

use crate::diagnostics::{DiagnosticSink, Reporter};
use crate::error::{SeaplaneError, SeaplaneResult};
use crate::variant::{Variant, VariantKind};

pub use parse_number::{parse_integer, parse_real};
pub use schema_builder::SchemaBuilder;

/// Option name (without marker) to value.
pub type OptionMap = HashMap<String, Variant, RandomState>;

/// Parser configuration
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParseOption {
    /// Emit "<program>: parsing arguments" from [`ArgParser::parse_args`]
    pub announce: bool,
}

/// Fills an [`OptionMap`] from command-line tokens.
///
/// Every error is reported through the parser's diagnostic sink, which is
/// flushed before the error is returned.
#[derive(Debug, Default)]
pub struct ArgParser {
    option: ParseOption,
    reporter: Reporter,
}

impl ArgParser {
    pub fn new(option: ParseOption) -> Self {
        ArgParser {
            option,
            reporter: Reporter::silent(),
        }
    }

    pub fn with_sink(option: ParseOption, sink: impl DiagnosticSink + 'static) -> Self {
        ArgParser {
            option,
            reporter: Reporter::new(sink),
        }
    }

    pub fn option(&self) -> &ParseOption {
        &self.option
    }

    /// Copy `schema` and overwrite its entries from `tokens`.
    ///
    /// Later tokens for the same option win. Stops at the first error; the
    /// partially filled copy is dropped.
    pub fn fill<S: AsRef<str>>(
        &mut self,
        schema: &OptionMap,
        tokens: &[S],
    ) -> SeaplaneResult<OptionMap> {
        let mut options = schema.clone();
        let mut index = 0;
        while index < tokens.len() {
            let step = apply_token(&mut options, tokens, index);
            index += self.reporter.check(step)?;
        }
        Ok(options)
    }

    /// Like [`ArgParser::fill`], but `argv[0]` is the program name.
    pub fn parse_args<S: AsRef<str>>(
        &mut self,
        schema: &OptionMap,
        argv: &[S],
    ) -> SeaplaneResult<OptionMap> {
        let (program, tokens) = match argv.split_first() {
            Some((program, tokens)) => (program.as_ref(), tokens),
            None => ("", argv),
        };
        if self.option.announce {
            self.reporter.note(&format!("{}: parsing arguments", program));
        }
        self.fill(schema, tokens)
    }
}

/// [`ArgParser::fill`] with default settings and no diagnostic output.
pub fn fill<S: AsRef<str>>(schema: &OptionMap, tokens: &[S]) -> SeaplaneResult<OptionMap> {
    ArgParser::default().fill(schema, tokens)
}

/// [`ArgParser::parse_args`] with default settings and no diagnostic output.
pub fn parse_args<S: AsRef<str>>(schema: &OptionMap, argv: &[S]) -> SeaplaneResult<OptionMap> {
    ArgParser::default().parse_args(schema, argv)
}

/// Entries ordered by name, for stable display.
pub fn sorted_entries(options: &OptionMap) -> Vec<(&str, &Variant)> {
    let mut entries: Vec<(&str, &Variant)> =
        options.iter().map(|(k, v)| (k.as_str(), v)).collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    entries
}

/// Apply the option starting at `tokens[index]`; returns how many tokens it used.
fn apply_token<S: AsRef<str>>(
    options: &mut OptionMap,
    tokens: &[S],
    index: usize,
) -> SeaplaneResult<usize> {
    let raw = tokens[index].as_ref();
    let current = raw.trim_start_matches(' ');

    let enable = match current.as_bytes().first() {
        Some(b'-') => true,
        Some(b'+') => false,
        _ => return Err(SeaplaneError::MalformedToken(raw.to_owned())),
    };
    let name = &current[1..];

    let option = options
        .get_mut(name)
        .ok_or_else(|| SeaplaneError::UnknownOption(current.to_owned()))?;

    let parsed = match option.data_type() {
        VariantKind::Boolean => {
            option.assign(Variant::Boolean(enable))?;
            return Ok(1);
        }
        VariantKind::Absent => return Err(SeaplaneError::InvalidSchema(name.to_owned())),
        VariantKind::Integer => Variant::Integer(parse_integer(value_token(tokens, index, current)?)?),
        VariantKind::Real => Variant::Real(parse_real(value_token(tokens, index, current)?)?),
        VariantKind::Text => Variant::text(value_token(tokens, index, current)?),
    };
    option.assign(parsed)?;
    Ok(2)
}

#[inline]
fn value_token<'a, S: AsRef<str>>(
    tokens: &'a [S],
    index: usize,
    option: &str,
) -> SeaplaneResult<&'a str> {
    tokens
        .get(index + 1)
        .map(|token| token.as_ref())
        .ok_or_else(|| SeaplaneError::MissingValue(option.to_owned()))
}
