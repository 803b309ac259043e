pub mod trimmed_mean;

pub use trimmed_mean::*;
