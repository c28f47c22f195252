//! Error types for twingraph operations.
//!
//! Query, path and context operations are infallible by contract. Only building
//! a [`GraphStore`](crate::GraphStore), serializing exports and calling the
//! assistant boundary can fail.

use thiserror::Error;

/// Result type alias for twingraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for dataset loading and export.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Two nodes in a dataset share the same id
    #[error("Duplicate node id: {node_id}")]
    DuplicateNode {
        /// The repeated id
        node_id: String,
    },

    /// A node failed validation (e.g., empty label)
    #[error("Invalid node {node_id}: {message}")]
    InvalidNode {
        /// ID of the offending node
        node_id: String,
        /// What was wrong with it
        message: String,
    },

    /// Node not found in the graph
    #[error("Node not found: {node_id}")]
    NodeNotFound {
        /// ID of the missing node
        node_id: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GraphError {
    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }
}

/// Failure reported by an [`AssistantClient`](crate::assistant::AssistantClient).
///
/// These never escape [`GroundedAssistant::ask`](crate::assistant::GroundedAssistant::ask);
/// they are rendered into the reply text instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistantError {
    /// Connection refused, reset, DNS failure and similar
    #[error("network failure: {message}")]
    Network {
        /// Error details
        message: String,
    },

    /// The request did not complete in time
    #[error("request timed out")]
    Timeout,

    /// The upstream answered with something that could not be parsed
    #[error("malformed response: {message}")]
    MalformedResponse {
        /// Error details
        message: String,
    },

    /// No API key or token configured for the upstream service
    #[error("missing credential for assistant service")]
    MissingCredential,

    /// The upstream rejected the request
    #[error("assistant service returned {status}: {message}")]
    Upstream {
        /// HTTP-like status code
        status: u16,
        /// Error details
        message: String,
    },
}

impl AssistantError {
    /// Whether retrying the same request may succeed.
    ///
    /// Only network-class failures qualify.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout)
    }
}
