/*
    Sample Resources
*/

use super::*;

/* --------------------------- Sample -------------------------- */
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    pub temperature: f32,
    pub humidity: f32,
}

impl Sample {
    pub const fn new(temperature: f32, humidity: f32) -> Self {
        Self { temperature, humidity }
    }
}

/* --------------------------- Error -------------------------- */
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SampleError {
    /// Temperature or humidity outside its physical range. The filter state is untouched.
    OutOfRange(Sample),
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::OutOfRange(sample) => write!(
                f,
                "sample out of range: {} C, {} %RH",
                sample.temperature, sample.humidity
            ),
        }
    }
}
