/*
    Channel Report Resources
*/

use super::*;

/* --------------------------- Report -------------------------- */
/// Snapshot of one channel for telemetry and relay logic.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelReport {
    pub id: u8,
    pub output: Option<Sample>,
    pub accepted: u32,
    pub rejected: u32,
    pub primed: bool,
}

impl ChannelReport {
    pub fn write_to_buffer<const N: usize>(&self, buffer: &mut heapless::String<N>) -> fmt::Result {
        write!(buffer, "{}", self)
    }
}

impl fmt::Display for ChannelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.output {
            Some(sample) => write!(
                f,
                "ch{} t={:.1} h={:.1}",
                self.id, sample.temperature, sample.humidity
            )?,
            None => write!(f, "ch{} t=- h=-", self.id)?,
        }
        write!(f, " ok={} rej={}", self.accepted, self.rejected)?;

        // warming up, zero slots still in the window
        if !self.primed {
            f.write_str("*")?;
        }
        Ok(())
    }
}
