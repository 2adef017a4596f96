// Variant - a small dynamically-typed scalar
//
// One of five kinds, each arm owning its payload:
// - Absent:  no payload (the default, used for "not yet typed")
// - Boolean: bool
// - Integer: i64 (every integral primitive and every enum converts here)
// - Real:    f64
// - Text:    owned String
//
// The kind of a typed variant is fixed: assignment only ever succeeds between
// equal kinds, or when the target is still Absent.
use crate::error::{SeaplaneError, SeaplaneResult};
use crate::variant::FromVariant;

// ============ Kind enum ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub enum VariantKind {
    #[default]
    Absent,
    Boolean,
    Integer,
    Real,
    Text,
}

impl VariantKind {
    pub const ALL: [VariantKind; 5] = [
        VariantKind::Absent,
        VariantKind::Boolean,
        VariantKind::Integer,
        VariantKind::Real,
        VariantKind::Text,
    ];

    /// Display name used in diagnostics
    pub const fn name(self) -> &'static str {
        match self {
            VariantKind::Absent => "Absent",
            VariantKind::Boolean => "Boolean",
            VariantKind::Integer => "Integer",
            VariantKind::Real => "Real",
            VariantKind::Text => "Text",
        }
    }
}

impl std::fmt::Display for VariantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ============ Variant ============

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Variant {
    #[default]
    Absent,
    Boolean(bool),
    Integer(i64),
    Real(f64),
    Text(String),
}

impl Variant {
    // ============ Constructors ============

    /// An untyped variant with no payload
    #[inline(always)]
    pub const fn new() -> Self {
        Variant::Absent
    }

    #[inline(always)]
    pub const fn boolean(b: bool) -> Self {
        Variant::Boolean(b)
    }

    #[inline(always)]
    pub const fn integer(i: i64) -> Self {
        Variant::Integer(i)
    }

    #[inline(always)]
    pub const fn real(n: f64) -> Self {
        Variant::Real(n)
    }

    #[inline]
    pub fn text(s: impl Into<String>) -> Self {
        Variant::Text(s.into())
    }

    /// Build an Integer variant from an enum through its underlying integer.
    #[inline]
    pub fn from_enum<E: ToUnderlying>(value: E) -> Self {
        Variant::Integer(value.to_underlying())
    }

    // ============ Kind access ============

    #[inline(always)]
    pub fn data_type(&self) -> VariantKind {
        match self {
            Variant::Absent => VariantKind::Absent,
            Variant::Boolean(_) => VariantKind::Boolean,
            Variant::Integer(_) => VariantKind::Integer,
            Variant::Real(_) => VariantKind::Real,
            Variant::Text(_) => VariantKind::Text,
        }
    }

    #[inline(always)]
    pub fn is_absent(&self) -> bool {
        matches!(self, Variant::Absent)
    }

    #[inline(always)]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Variant::Boolean(_))
    }

    #[inline(always)]
    pub fn is_integer(&self) -> bool {
        matches!(self, Variant::Integer(_))
    }

    #[inline(always)]
    pub fn is_real(&self) -> bool {
        matches!(self, Variant::Real(_))
    }

    #[inline(always)]
    pub fn is_text(&self) -> bool {
        matches!(self, Variant::Text(_))
    }

    // ============ Borrowing accessors ============

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Variant::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Variant::Integer(i) => Some(*i),
            _ => None,
        }
    }

    #[inline]
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Variant::Real(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Variant::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Typed extraction.
    ///
    /// Succeeds only when the held kind matches the class of `T`:
    /// `bool` needs Boolean, any integer primitive needs Integer, `f32`/`f64`
    /// need Real and `String` needs Text.
    pub fn get<T: FromVariant>(&self) -> SeaplaneResult<T> {
        T::from_variant(self).ok_or(SeaplaneError::WrongType {
            actual: self.data_type(),
        })
    }

    // ============ Assignment ============

    /// Move-assign `other` into `self`, enforcing kind compatibility.
    ///
    /// A typed variant only accepts a value of the same kind; an Absent
    /// variant takes on both the kind and the payload of `other`. On a
    /// mismatch `self` is left untouched.
    pub fn assign(&mut self, other: Variant) -> SeaplaneResult<()> {
        self.check_assignable(other.data_type())?;
        match (&mut *self, other) {
            (Variant::Text(dst), Variant::Text(src)) => *dst = src,
            (dst, src) => *dst = src,
        }
        Ok(())
    }

    /// Copy-assign from a borrowed variant. Same rules as [`Variant::assign`];
    /// text overwrites reuse the existing buffer.
    pub fn assign_from(&mut self, other: &Variant) -> SeaplaneResult<()> {
        self.check_assignable(other.data_type())?;
        match (&mut *self, other) {
            (Variant::Text(dst), Variant::Text(src)) => dst.clone_from(src),
            (dst, src) => *dst = src.clone(),
        }
        Ok(())
    }

    #[inline]
    fn check_assignable(&self, incoming: VariantKind) -> SeaplaneResult<()> {
        let current = self.data_type();
        if current != VariantKind::Absent && current != incoming {
            return Err(SeaplaneError::TypeMismatch {
                target: current,
                incoming,
            });
        }
        Ok(())
    }

    // ============ Rendering ============

    /// Render the payload as text. Absent renders as an empty string.
    pub fn format(&self) -> String {
        match self {
            Variant::Absent => String::new(),
            Variant::Boolean(b) => b.to_string(),
            Variant::Integer(i) => {
                let mut buffer = itoa::Buffer::new();
                buffer.format(*i).to_owned()
            }
            Variant::Real(n) => format_real(*n),
            Variant::Text(s) => s.clone(),
        }
    }
}

/// Shortest of fixed and exponent notation, fixed on a tie.
///
/// The exponent carries a sign and at least two digits (`1e+20`, `1.5e-07`);
/// non-finite values render as `inf`, `-inf` and `nan`.
fn format_real(n: f64) -> String {
    if n.is_nan() {
        return if n.is_sign_negative() { "-nan" } else { "nan" }.to_owned();
    }
    if n.is_infinite() {
        return if n < 0.0 { "-inf" } else { "inf" }.to_owned();
    }

    let fixed = n.to_string();
    let exponent_form = format!("{:e}", n);
    let Some((mantissa, exponent)) = exponent_form.split_once('e') else {
        return fixed;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    let scientific = format!("{}e{}{:0>2}", mantissa, sign, digits);
    if scientific.len() < fixed.len() {
        scientific
    } else {
        fixed
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Absent => Ok(()),
            Variant::Boolean(b) => write!(f, "{}", b),
            Variant::Integer(i) => f.write_str(itoa::Buffer::new().format(*i)),
            Variant::Real(n) => f.write_str(&format_real(*n)),
            Variant::Text(s) => f.write_str(s),
        }
    }
}

// ============ Enum conversion ============

/// Explicit conversion of a fieldless enum to its underlying integer.
///
/// Implemented by [`variant_enum!`](crate::variant_enum), which also provides
/// `From<E> for Variant`.
pub trait ToUnderlying: Copy {
    fn to_underlying(self) -> i64;
}

/// Make a fieldless enum usable as a [`Variant`] literal.
///
/// ```ignore
/// #[derive(Clone, Copy)]
/// #[repr(u8)]
/// enum Level { Low = 1, High = 3 }
/// seaplane::variant_enum!(Level);
///
/// assert_eq!(Variant::from(Level::High), Variant::Integer(3));
/// ```
#[macro_export]
macro_rules! variant_enum {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::variant::ToUnderlying for $ty {
                #[inline]
                fn to_underlying(self) -> i64 {
                    self as i64
                }
            }

            impl ::std::convert::From<$ty> for $crate::variant::Variant {
                #[inline]
                fn from(value: $ty) -> Self {
                    $crate::variant::Variant::from_enum(value)
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent() {
        let v = Variant::new();
        assert!(v.is_absent());
        assert_eq!(v.data_type(), VariantKind::Absent);
        assert_eq!(v.format(), "");
        assert_eq!(v, Variant::default());
    }

    #[test]
    fn test_kind_names() {
        let names: Vec<&str> = VariantKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names, ["Absent", "Boolean", "Integer", "Real", "Text"]);
        assert_eq!(VariantKind::Real.to_string(), "Real");
    }

    #[test]
    fn test_boolean_is_not_integer() {
        let b = Variant::boolean(true);
        assert!(b.is_boolean());
        assert!(!b.is_integer());
        assert_eq!(b.as_integer(), None);
        assert_eq!(b.format(), "true");
    }

    #[test]
    fn test_format_numbers() {
        assert_eq!(Variant::integer(-42).format(), "-42");
        assert_eq!(Variant::integer(i64::MIN).format(), "-9223372036854775808");
        assert_eq!(Variant::real(0.5).format(), "0.5");
        assert_eq!(Variant::real(7.3).format(), "7.3");
        assert_eq!(Variant::real(1.0).format(), "1");
        assert_eq!(Variant::real(12345.0).format(), "12345");
    }

    #[test]
    fn test_format_real_exponent_form() {
        assert_eq!(Variant::real(1e20).format(), "1e+20");
        assert_eq!(Variant::real(-1e20).format(), "-1e+20");
        assert_eq!(Variant::real(1e-7).format(), "1e-07");
        assert_eq!(Variant::real(1.5e-7).format(), "1.5e-07");
        assert_eq!(Variant::real(100000.0).format(), "1e+05");
        assert_eq!(Variant::real(1e100).format(), "1e+100");
        assert_eq!(Variant::real(0.001).format(), "0.001");
        assert_eq!(Variant::real(0.0).format(), "0");
    }

    #[test]
    fn test_format_real_non_finite() {
        assert_eq!(Variant::real(f64::INFINITY).format(), "inf");
        assert_eq!(Variant::real(f64::NEG_INFINITY).format(), "-inf");
        assert_eq!(Variant::real(f64::NAN).format(), "nan");
    }

    #[test]
    fn test_display_matches_format() {
        for v in [
            Variant::new(),
            Variant::boolean(false),
            Variant::integer(6),
            Variant::real(-2.25),
            Variant::real(1e20),
            Variant::text("Yellow?"),
        ] {
            assert_eq!(v.to_string(), v.format());
        }
    }

    #[test]
    fn test_mismatch_leaves_target_untouched() {
        let mut v = Variant::integer(3);
        let err = v.assign(Variant::text("three")).unwrap_err();
        assert!(matches!(
            err,
            SeaplaneError::TypeMismatch {
                target: VariantKind::Integer,
                incoming: VariantKind::Text
            }
        ));
        assert_eq!(v, Variant::integer(3));
    }

    #[test]
    fn test_absent_into_typed_is_mismatch() {
        let mut v = Variant::real(1.5);
        assert!(v.assign_from(&Variant::new()).is_err());
        assert_eq!(v, Variant::real(1.5));

        let mut empty = Variant::new();
        assert!(empty.assign(Variant::new()).is_ok());
        assert!(empty.is_absent());
    }
}
