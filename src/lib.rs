//! Trimmed-mean smoothing for a pair of redundant DHT temperature/humidity sensors.
//!
//! Each channel keeps the last ten accepted readings, drops one maximum and one
//! minimum per quantity and reports the mean of the remaining eight. Readings
//! outside the sensor's physical range are refused without touching state.

#![cfg_attr(not(test), no_std)]

pub mod control;
pub mod resources;

pub use control::{TrimmedMeanFilter, TrimmedWindow};
pub use resources::{
    ChannelHandler, ChannelId, ChannelReport, FilterConfig, Sample, SampleError, SensorBank,
    ValidRange, DEFAULT_FILTER_CONFIG, WINDOW_SIZE,
};
