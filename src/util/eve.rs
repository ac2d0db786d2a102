//! EVE Online-specific helpers and constants.

/// Base URL of the EVE image server used for portrait references.
pub const IMAGE_SERVER_URL: &str = "https://images.evetech.net";

/// Portrait size requested for the player grid.
pub const DEFAULT_PORTRAIT_SIZE: u32 = 32;

/// Filters corporation/alliance ID candidates down to real entity IDs.
///
/// Characters without an alliance carry no alliance ID, and some data
/// sources use zero or negative values as placeholders. `POST
/// /universe/names/` rejects such IDs, so they are dropped before the
/// lookup. Order of the surviving IDs is preserved.
pub fn filter_valid_entity_ids(ids: &[Option<i64>]) -> Vec<i64> {
    ids.iter().flatten().copied().filter(|&id| id > 0).collect()
}
