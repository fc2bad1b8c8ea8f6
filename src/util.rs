/// Numeric formatting helpers.
///
/// Floats are rendered in the C `%g` style: a fixed number of significant
/// digits, trailing zeros stripped, switching to scientific notation for very
/// large and very small magnitudes.
pub mod num;
