//! Encoding of the countdown collection into its persisted text blob.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::countdown::Countdown;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed countdown collection: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("failed to encode countdown collection: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Serializes the collection, preserving order.
pub fn encode_countdowns(countdowns: &[Countdown]) -> Result<String, CodecError> {
    serde_json::to_string(countdowns).map_err(CodecError::Encode)
}

/// Decodes a persisted collection. Either the whole blob decodes or an error
/// is returned. A repeated id keeps its first record; later copies are
/// dropped with a warning.
pub fn decode_countdowns(data: &str) -> Result<Vec<Countdown>, CodecError> {
    let countdowns: Vec<Countdown> = serde_json::from_str(data).map_err(CodecError::Malformed)?;

    let mut seen = HashSet::with_capacity(countdowns.len());
    Ok(countdowns
        .into_iter()
        .filter(|countdown| {
            let first = seen.insert(countdown.id);
            if !first {
                log::warn!(
                    "Dropping duplicate countdown {} ({:?})",
                    countdown.id,
                    countdown.title
                );
            }
            first
        })
        .collect())
}
