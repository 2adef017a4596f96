//! Conversions between Rust scalars and [`Variant`].
//!
//! `From<T> for Variant` builds a variant from a literal:
//! - `bool` → Boolean
//! - `i8`..`i64`, `isize`, `u8`..`u64`, `usize` → Integer
//! - `f32`, `f64` → Real
//! - `String`, `&str`, `&String`, `Box<str>`, `Cow<str>`, `char` → Text
//!
//! [`FromVariant`] goes the other way and is what [`Variant::get`] uses.
//! Unlike a scripting language there is no coercion between kinds: an Integer
//! variant never yields an `f64` and a Real never yields an `i32`.

use std::borrow::Cow;

use crate::variant::Variant;

/// Extract a Rust value from a [`Variant`] of the matching kind.
///
/// Return `None` when the variant holds another kind.
pub trait FromVariant: Sized {
    fn from_variant(value: &Variant) -> Option<Self>;
}

// ==================== Identity ====================

impl FromVariant for Variant {
    #[inline]
    fn from_variant(value: &Variant) -> Option<Self> {
        Some(value.clone())
    }
}

// ==================== Boolean ====================

impl FromVariant for bool {
    #[inline]
    fn from_variant(value: &Variant) -> Option<Self> {
        value.as_bool()
    }
}

impl From<bool> for Variant {
    #[inline]
    fn from(value: bool) -> Self {
        Variant::Boolean(value)
    }
}

// ==================== Integer types ====================

macro_rules! impl_variant_int {
    ($($ty:ty),*) => {
        $(
            impl FromVariant for $ty {
                #[inline]
                fn from_variant(value: &Variant) -> Option<Self> {
                    value.as_integer().map(|i| i as $ty)
                }
            }

            impl From<$ty> for Variant {
                #[inline]
                fn from(value: $ty) -> Self {
                    Variant::Integer(value as i64)
                }
            }
        )*
    };
}

impl_variant_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// ==================== Float types ====================

macro_rules! impl_variant_float {
    ($($ty:ty),*) => {
        $(
            impl FromVariant for $ty {
                #[inline]
                fn from_variant(value: &Variant) -> Option<Self> {
                    value.as_real().map(|n| n as $ty)
                }
            }

            impl From<$ty> for Variant {
                #[inline]
                fn from(value: $ty) -> Self {
                    Variant::Real(value as f64)
                }
            }
        )*
    };
}

impl_variant_float!(f32, f64);

// ==================== Text ====================

impl FromVariant for String {
    #[inline]
    fn from_variant(value: &Variant) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl From<String> for Variant {
    #[inline]
    fn from(value: String) -> Self {
        Variant::Text(value)
    }
}

impl From<&str> for Variant {
    #[inline]
    fn from(value: &str) -> Self {
        Variant::Text(value.to_owned())
    }
}

impl From<&String> for Variant {
    #[inline]
    fn from(value: &String) -> Self {
        Variant::Text(value.clone())
    }
}

impl From<Box<str>> for Variant {
    #[inline]
    fn from(value: Box<str>) -> Self {
        Variant::Text(value.into_string())
    }
}

impl From<Cow<'_, str>> for Variant {
    #[inline]
    fn from(value: Cow<'_, str>) -> Self {
        Variant::Text(value.into_owned())
    }
}

impl From<char> for Variant {
    #[inline]
    fn from(value: char) -> Self {
        Variant::Text(value.to_string())
    }
}

// ==================== Option<T> ====================

impl<T: Into<Variant>> From<Option<T>> for Variant {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Variant::Absent,
        }
    }
}

impl<T: FromVariant> FromVariant for Option<T> {
    /// Absent extracts as `None`; any other kind must match `T`.
    #[inline]
    fn from_variant(value: &Variant) -> Option<Self> {
        if value.is_absent() {
            Some(None)
        } else {
            T::from_variant(value).map(Some)
        }
    }
}
