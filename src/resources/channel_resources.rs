/*
    Sensor Channel Resources
*/

use super::*;

/* --------------------------- Channel Id -------------------------- */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelId {
    Primary = 0,
    Secondary = 1,
}

impl ChannelId {
    pub const ALL: [ChannelId; N_CHANNELS] = [ChannelId::Primary, ChannelId::Secondary];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/* --------------------------- Channel Handler -------------------------- */
/// One sensor channel: the filter plus the counters readers poll.
/// Calls to `submit` on the same channel must come from one task.
pub struct ChannelHandler {
    filter: Mutex<CriticalSectionRawMutex, RefCell<TrimmedMeanFilter>>,
    rejected: AtomicU32,
    pub id: u8,
}

impl ChannelHandler {
    pub const fn new(id: u8, config: FilterConfig) -> Self {
        Self {
            filter: Mutex::new(RefCell::new(TrimmedMeanFilter::new(config))),
            rejected: AtomicU32::new(0),
            id,
        }
    }

    pub fn submit(&self, sample: Sample) -> Result<Sample, SampleError> {
        let result = self.filter.lock(|filter| {
            let result = filter.borrow_mut().update(sample);
            if result.is_err() {
                self.rejected.fetch_add(1, Ordering::Relaxed);
            }
            result
        });

        match &result {
            Ok(filtered) => {
                log::debug!(
                    "ch{}: raw {} C {} %RH -> {} C {} %RH",
                    self.id,
                    sample.temperature,
                    sample.humidity,
                    filtered.temperature,
                    filtered.humidity
                );
            }
            Err(err) => log::warn!("ch{}: {}", self.id, err),
        }

        result
    }

    pub fn latest(&self) -> Option<Sample> {
        self.filter.lock(|filter| filter.borrow().output())
    }

    pub fn accepted_count(&self) -> u32 {
        self.filter.lock(|filter| filter.borrow().accepted())
    }

    pub fn rejected_count(&self) -> u32 {
        self.rejected.load(Ordering::Relaxed)
    }

    pub fn is_primed(&self) -> bool {
        self.filter.lock(|filter| filter.borrow().is_primed())
    }

    pub fn reset(&self) {
        self.filter.lock(|filter| {
            filter.borrow_mut().reset();
            self.rejected.store(0, Ordering::Relaxed);
        });
    }

    /// Filter state and counter are read in one critical section.
    pub fn report(&self) -> ChannelReport {
        self.filter.lock(|filter| {
            let filter = filter.borrow();
            ChannelReport {
                id: self.id,
                output: filter.output(),
                accepted: filter.accepted(),
                rejected: self.rejected.load(Ordering::Relaxed),
                primed: filter.is_primed(),
            }
        })
    }
}

/* --------------------------- Sensor Bank -------------------------- */
/// The redundant sensor pair. Channels share no state.
pub struct SensorBank {
    channels: [ChannelHandler; N_CHANNELS],
}

impl SensorBank {
    pub const fn new(configs: [FilterConfig; N_CHANNELS]) -> Self {
        Self {
            channels: crate::create_channels!(configs; 0, 1),
        }
    }

    pub fn channel(&self, id: ChannelId) -> &ChannelHandler {
        &self.channels[id.index()]
    }

    pub fn submit(&self, id: ChannelId, sample: Sample) -> Result<Sample, SampleError> {
        self.channel(id).submit(sample)
    }

    pub fn reports(&self) -> [ChannelReport; N_CHANNELS] {
        ChannelId::ALL.map(|id| self.channel(id).report())
    }
}

impl Default for SensorBank {
    fn default() -> Self {
        Self::new([DEFAULT_FILTER_CONFIG; N_CHANNELS])
    }
}
