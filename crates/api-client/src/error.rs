use contracts::envelope::EnvelopeError;
use thiserror::Error;

/// Faults raised below the envelope: transport problems, bodies that are not
/// envelopes at all, or error statuses without a usable error body.
///
/// Backend-reported domain errors never surface here. They arrive as the
/// `Failure` variant of `ApiResponse` and are ordinary data for the caller.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),
    #[error("unexpected HTTP status {0} without an error envelope")]
    UnexpectedStatus(reqwest::StatusCode),
}
