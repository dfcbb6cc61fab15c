//! # Numeric helpers
//!
//! Small building blocks used by every astronomical module:
//!
//! - [`angle`](crate::math::angle): unit conversions and normalization of angles,
//! - [`interval`](crate::math::interval): closed and right-open intervals (clipping, modular reduction)
//!   plus the range checks used by the validating constructors,
//! - [`polynomial`](crate::math::polynomial): Horner evaluation of polynomials given highest degree first.
pub mod angle;
pub mod interval;
pub mod polynomial;
