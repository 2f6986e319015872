//! Numerical primitives: the standard normal distribution functions shared by
//! every closed form in the crate.

pub mod normal;

pub use normal::{normal_cdf, normal_pdf};
