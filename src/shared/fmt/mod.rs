//! Display formatting: grouped numbers, currency amounts, percentages.

pub mod currency;
pub mod num;
