//! JSON export of fleet snapshots.

use crate::error::ExportError;
use crate::telemetry::FleetSnapshot;

/// Serialize a fleet snapshot as pretty-printed JSON.
pub fn to_json_pretty(snapshot: &FleetSnapshot) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Parse a fleet snapshot previously written by [`to_json_pretty`].
pub fn from_json(json: &str) -> Result<FleetSnapshot, ExportError> {
    Ok(serde_json::from_str(json)?)
}
