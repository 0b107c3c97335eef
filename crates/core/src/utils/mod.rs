pub mod decimal_utils;

pub use decimal_utils::round_half_even;
