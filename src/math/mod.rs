//! Integer helpers for exact swap arithmetic.
//!
//! No floating point anywhere: products are taken at double width and
//! every division names its rounding direction.

mod rounding;
mod wide;

pub use rounding::{ceil_div, div_round};
pub use wide::{mul_div, narrow, widening_mul};
