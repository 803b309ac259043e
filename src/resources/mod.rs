/* 
* Resources Hub
*/

/* --------------------------- Library -------------------------- */
use core::cell::RefCell;
use core::fmt;
use core::fmt::Write;
use portable_atomic::AtomicU32;
use portable_atomic::Ordering;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use crate::control::TrimmedMeanFilter;

/* --------------------------- Declare Modules -------------------------- */
pub mod config;
pub mod sample_resources;
pub mod channel_resources;
pub mod report_resources;
pub mod macros;

pub use config::*;
pub use sample_resources::*;
pub use channel_resources::*;
pub use report_resources::*;
