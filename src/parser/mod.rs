//! Wire codecs between the in-memory models and persisted values.

pub mod composition;
pub mod station;

// Re-export the codec entry points
pub use composition::{
    classify, composition_records, load_composition, load_composition_records,
    serialize_composition, LegacyFormat, VariantRecord,
};
pub use station::{load_station_list, load_stations, serialize_stations};
