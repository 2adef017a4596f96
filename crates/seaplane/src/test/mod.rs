#[cfg(feature = "serde")]
pub mod test_serde;
