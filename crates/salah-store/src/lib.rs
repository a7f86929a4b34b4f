//! Store layer: collaborator traits, the settings resolver, DST
//! normalization, and the month-granularity caching repositories.
//!
//! Persistence and settings are host concerns; this crate only defines the
//! traits it consumes and ships in-memory implementations for tests and
//! small hosts. All shared cache state is owned by explicit repository
//! instances and serialized through a `tokio::sync::Mutex`.

pub mod clock;
pub mod error;
pub mod memory;
pub mod normalize;
pub mod repository;
pub mod settings;
pub mod store;
pub mod tracker;

pub use clock::{Clock, FixedClock, SystemClock, ZoneRules};
pub use error::StoreError;
pub use memory::{MemoryPrayerTimeStore, MemoryTrackerStore};
pub use normalize::normalize_for_zone;
pub use repository::PrayerTimesRepository;
pub use settings::{ResolvedSettings, SettingsSource, keys, resolve_settings};
pub use store::{PrayerTimeStore, TrackerRow, TrackerStore};
pub use tracker::{FastTrackerRepository, PrayerTrackerRepository, TrackerRepository};
