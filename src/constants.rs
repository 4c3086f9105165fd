//! Application-wide constants.

/// Separator between token-type identifiers in the composition wire format.
pub const PART_SEPARATOR: &str = ",";

/// Separator between station names in the station wire format.
pub const STATION_SEPARATOR: &str = "\n";

/// Directory the dashboard serves token icons from.
pub const ICON_DIR: &str = "static/assets/icons";
