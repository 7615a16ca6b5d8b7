//! Numbers: canonical rationals, big floats and the arithmetic evaluators.

pub mod arithmetic;
pub mod numeric_utils;
pub mod numerical;

pub use arithmetic::*;
pub use numeric_utils::*;
pub use numerical::*;
