pub mod algorithm;
pub mod constants;
