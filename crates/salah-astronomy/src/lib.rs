//! Astronomical core: solar position, the six-prayer calculator, and the
//! Qibla bearing.
//!
//! Everything in this crate is a pure function of its inputs. Dates and
//! coordinates go in, instants (or `None` for unresolvable high-latitude
//! cases) come out. No I/O, no clocks, no shared state.

pub mod astronomical;
pub mod julian;
pub mod prayer;
pub mod qibla;
pub mod seasonal;
pub mod solar;

pub use prayer::PrayerTimesForDay;
pub use qibla::{KAABA, qibla_bearing};
pub use solar::{SolarCoordinates, SolarTime};
