/*
*  Default Filter Config
*
*  DHT22 Physical Limits
*  - Temperature -20.0 .. 60.0 C
*  - Humidity 0.0 .. 100.0 %RH
*/

use super::sample_resources::Sample;

/* --------------------------- Window -------------------------- */
pub const WINDOW_SIZE: usize = 10;

/* --------------------------- Channels -------------------------- */
pub const N_CHANNELS: usize = 2;

/* --------------------------- Valid Ranges -------------------------- */
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ValidRange {
    pub min: f32,
    pub max: f32,
}

impl ValidRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Inclusive on both ends. NaN is never contained.
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const TEMPERATURE_RANGE: ValidRange = ValidRange::new(-20.0, 60.0);
pub const HUMIDITY_RANGE: ValidRange = ValidRange::new(0.0, 100.0);

/* --------------------------- Extremum Scan Seeds -------------------------- */
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanSeeds {
    pub max: f32,
    pub min: f32,
}

impl ScanSeeds {
    /// A stored value must stay between the seeds, otherwise the scan may
    /// keep a stale index.
    pub fn brackets(&self, value: f32) -> bool {
        value >= self.max && value <= self.min
    }
}

pub const TEMPERATURE_SEEDS: ScanSeeds = ScanSeeds { max: -30.0, min: 100.0 };
pub const HUMIDITY_SEEDS: ScanSeeds = ScanSeeds { max: 0.0, min: 100.0 };

/* --------------------------- Filter Config -------------------------- */
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FilterConfig {
    pub temperature_range: ValidRange,
    pub humidity_range: ValidRange,
    pub temperature_offset: f32, // Calibration, added to the raw reading
    pub humidity_offset: f32,
}

impl FilterConfig {
    pub fn corrected(&self, sample: Sample) -> Sample {
        Sample::new(
            sample.temperature + self.temperature_offset,
            sample.humidity + self.humidity_offset,
        )
    }

    /// Range check for raw and corrected readings alike. Values past the
    /// scan seeds are refused even when a custom range would allow them.
    pub fn accepts(&self, sample: Sample) -> bool {
        self.temperature_range.contains(sample.temperature)
            && self.humidity_range.contains(sample.humidity)
            && TEMPERATURE_SEEDS.brackets(sample.temperature)
            && HUMIDITY_SEEDS.brackets(sample.humidity)
    }
}

pub const DEFAULT_FILTER_CONFIG: FilterConfig = FilterConfig {
    temperature_range: TEMPERATURE_RANGE,
    humidity_range: HUMIDITY_RANGE,
    temperature_offset: 0.0,
    humidity_offset: 0.0,
};

impl Default for FilterConfig {
    fn default() -> Self {
        DEFAULT_FILTER_CONFIG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_contains() {
        assert!(TEMPERATURE_RANGE.contains(-20.0));
        assert!(TEMPERATURE_RANGE.contains(60.0));
        assert!(!TEMPERATURE_RANGE.contains(60.01));
        assert!(!HUMIDITY_RANGE.contains(-0.01));
        assert!(!HUMIDITY_RANGE.contains(f32::NAN));
        assert!(!HUMIDITY_RANGE.contains(f32::INFINITY));
    }

    #[test]
    fn test_accepts_within_ranges_and_seeds() {
        assert!(DEFAULT_FILTER_CONFIG.accepts(Sample::new(-20.0, 0.0)));
        assert!(DEFAULT_FILTER_CONFIG.accepts(Sample::new(60.0, 100.0)));
        assert!(!DEFAULT_FILTER_CONFIG.accepts(Sample::new(20.0, -0.5)));

        let wide = FilterConfig {
            temperature_range: ValidRange::new(-50.0, 150.0),
            humidity_range: ValidRange::new(-10.0, 110.0),
            ..DEFAULT_FILTER_CONFIG
        };
        assert!(wide.accepts(Sample::new(-30.0, 0.0)));
        assert!(!wide.accepts(Sample::new(-31.0, 50.0)));
        assert!(!wide.accepts(Sample::new(20.0, -5.0)));
        assert!(!wide.accepts(Sample::new(20.0, 105.0)));
    }

    #[test]
    fn test_corrected_adds_offsets() {
        let config = FilterConfig {
            temperature_offset: 0.5,
            humidity_offset: -5.0,
            ..DEFAULT_FILTER_CONFIG
        };
        assert_eq!(config.corrected(Sample::new(20.0, 40.0)), Sample::new(20.5, 35.0));
    }
}
