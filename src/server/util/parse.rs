use crate::server::error::internal::InternalError;

/// Parses a Discord snowflake stored as a string column.
///
/// # Arguments
/// - `value` - The stored string representation of the ID
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed ID
/// - `Err(InternalError::ParseStringId)` - The stored value is not a valid u64
pub fn parse_discord_id(value: &str) -> Result<u64, InternalError> {
    value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId {
            value: value.to_string(),
            source: e,
        })
}
