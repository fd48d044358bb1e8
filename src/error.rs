//! Error taxonomy of the kinematics library

use crate::frame::EventFrame;
use thiserror::Error;

/// Errors raised while building kinematics or applying frame boosts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KinematicsError {
    /// The collision was not specified in a physically or logically valid way
    #[error("invalid kinematics specification: {0}")]
    InvalidSpecification(String),

    /// No boost is known between the requested pair of frames
    #[error("boosts from {from} to {to} are not supported")]
    UnsupportedBoost {
        /// Frame in which the event was generated
        from: EventFrame,
        /// Frame which the kinematics were specified in
        to: EventFrame,
    },
}

impl KinematicsError {
    /// Shorthand for building an `InvalidSpecification` error
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidSpecification(message.into())
    }
}

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, KinematicsError>;
