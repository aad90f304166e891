//! Server fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::server;

/// Default test server ID.
pub const DEFAULT_ID: &str = "33333333-0000-0000-0000-000000000001";

/// Default test server name.
pub const DEFAULT_NAME: &str = "fixture-server";

/// Default flavor ID referenced by the fixture.
pub const DEFAULT_FLAVOR_ID: &str = "11111111-0000-0000-0000-000000000002";

/// Default image ID referenced by the fixture.
pub const DEFAULT_IMAGE_ID: &str = "22222222-0000-0000-0000-000000000001";

/// Creates a server entity model with default values.
///
/// # Default Values
/// - id: `DEFAULT_ID`
/// - name: `"fixture-server"`
/// - status: `"ACTIVE"`
/// - ip_address: `"10.0.0.10"`
/// - created_at / updated_at: 2026-01-01T00:00:00Z
pub fn entity() -> server::Model {
    entity_with_status("ACTIVE")
}

/// Creates a server entity model with default values and the given raw status.
pub fn entity_with_status(status: &str) -> server::Model {
    let timestamp = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

    server::Model {
        id: DEFAULT_ID.to_string(),
        name: DEFAULT_NAME.to_string(),
        status: status.to_string(),
        flavor_id: DEFAULT_FLAVOR_ID.to_string(),
        image_id: DEFAULT_IMAGE_ID.to_string(),
        ip_address: "10.0.0.10".to_string(),
        created_at: timestamp,
        updated_at: timestamp,
    }
}
