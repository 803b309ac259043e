/*
    Trimmed Mean Filter
*/

use crate::resources::config::*;
use crate::resources::sample_resources::{Sample, SampleError};

/* --------------------------- Window -------------------------- */
/// Circular history of one quantity with the extremum scratch kept between calls.
pub struct TrimmedWindow<const N: usize> {
    values: [f32; N],
    max_index: usize,
    min_index: usize,
    seeds: ScanSeeds,
}

impl<const N: usize> TrimmedWindow<N> {
    const WINDOW_CHECK: () = assert!(N >= 3, "trimmed window needs at least 3 slots");

    pub const fn new(seeds: ScanSeeds) -> Self {
        let () = Self::WINDOW_CHECK;
        Self {
            values: [0.0; N],
            max_index: 0,
            min_index: 0,
            seeds,
        }
    }

    /// Slots past the end are ignored.
    pub(crate) fn write(&mut self, slot: usize, value: f32) {
        if let Some(entry) = self.values.get_mut(slot) {
            *entry = value;
        }
    }

    pub fn values(&self) -> &[f32; N] {
        &self.values
    }

    /// Indices left out of the sum, as `(max, min)`.
    pub fn excluded(&self) -> (usize, usize) {
        (self.max_index, self.min_index)
    }

    /// Strict comparisons: the first occurrence of an extremum wins, and an
    /// index nobody beats keeps its value from the previous scan.
    fn scan(&mut self) {
        let mut max = self.seeds.max;
        let mut min = self.seeds.min;

        for (i, &value) in self.values.iter().enumerate() {
            if value > max {
                max = value;
                self.max_index = i;
            }
            if value < min {
                min = value;
                self.min_index = i;
            }
        }
    }

    /// All-equal windows leave both indices on the same slot; push them apart
    /// so exactly two slots are dropped.
    fn separate_extremes(&mut self) {
        if self.max_index == self.min_index {
            if self.max_index < N - 2 {
                self.max_index += 1;
            } else {
                self.max_index -= 1;
            }
        }
    }

    pub fn trimmed_mean(&mut self) -> f32 {
        self.scan();
        self.separate_extremes();

        let mut sum = 0.0;
        for (i, &value) in self.values.iter().enumerate() {
            if i != self.max_index && i != self.min_index {
                sum += value;
            }
        }

        sum / (N - 2) as f32
    }
}

/* --------------------------- Filter -------------------------- */
pub struct TrimmedMeanFilter<const N: usize = WINDOW_SIZE> {
    temperature: TrimmedWindow<N>,
    humidity: TrimmedWindow<N>,
    cursor: usize,
    accepted: u32,
    output: Option<Sample>,
    config: FilterConfig,
}

impl<const N: usize> TrimmedMeanFilter<N> {
    pub const fn new(config: FilterConfig) -> Self {
        Self {
            temperature: TrimmedWindow::new(TEMPERATURE_SEEDS),
            humidity: TrimmedWindow::new(HUMIDITY_SEEDS),
            cursor: 0,
            accepted: 0,
            output: None,
            config,
        }
    }

    pub fn update(&mut self, sample: Sample) -> Result<Sample, SampleError> {
        let corrected = self.config.corrected(sample);
        if !self.config.accepts(sample) || !self.config.accepts(corrected) {
            return Err(SampleError::OutOfRange(sample));
        }

        self.temperature.write(self.cursor, corrected.temperature);
        self.humidity.write(self.cursor, corrected.humidity);
        self.cursor = (self.cursor + 1) % N;
        self.accepted = self.accepted.saturating_add(1);

        let filtered = Sample::new(self.temperature.trimmed_mean(), self.humidity.trimmed_mean());
        self.output = Some(filtered);

        Ok(filtered)
    }

    pub fn output(&self) -> Option<Sample> {
        self.output
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn accepted(&self) -> u32 {
        self.accepted
    }

    /// True once every slot holds a real reading. Before that the output
    /// still averages zero-filled slots.
    pub fn is_primed(&self) -> bool {
        self.accepted as usize >= N
    }

    pub fn temperature_window(&self) -> &TrimmedWindow<N> {
        &self.temperature
    }

    pub fn humidity_window(&self) -> &TrimmedWindow<N> {
        &self.humidity
    }

    pub fn config(&self) -> FilterConfig {
        self.config
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }
}
