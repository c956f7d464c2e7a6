use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// One entry of a GraphQL `errors` array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteError {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<ErrorExtensions>,
}

/// Server-specific diagnostics attached to a [`RemoteError`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorExtensions {
    /// Machine-readable detail, e.g. `Cannot return null for non-nullable field "Review.author_name".`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl RemoteError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: Some(message.into()), extensions: None }
    }

    #[must_use]
    pub fn with_debug_message(mut self, debug: impl Into<String>) -> Self {
        self.extensions.get_or_insert_with(ErrorExtensions::default).debug_message =
            Some(debug.into());
        self
    }

    /// The debug message when the server sent one.
    #[must_use]
    pub fn debug_message(&self) -> Option<&str> {
        self.extensions.as_ref().and_then(|ext| ext.debug_message.as_deref())
    }
}

/// Everything that can go wrong while talking to the GraphQL endpoint.
#[gamma_derive::gamma_error]
pub enum ClientError {
    /// The server answered 2xx but the payload carried `errors`.
    #[error("GraphQL request failed{}: {} remote error(s)", format_context(.context), .errors.len())]
    Remote { errors: Vec<RemoteError>, context: Option<Cow<'static, str>> },

    /// The server answered with a non-success status; the body may still carry `errors`.
    #[error("Response not successful{}: received status code {status}", format_context(.context))]
    Status { status: u16, errors: Vec<RemoteError>, context: Option<Cow<'static, str>> },

    /// The request never produced a response (DNS, refused connection, timeout, ...).
    #[error("Network failure{}: {source}", format_context(.context))]
    Network { source: reqwest::Error, context: Option<Cow<'static, str>> },

    /// The response body was not valid GraphQL JSON.
    #[error("Malformed response{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Persisted client state could not be read or written.
    #[error("Token storage error{}: {source}", format_context(.context))]
    Storage { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal client error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ClientError {
    /// Structured remote errors carried by this error, in server order.
    #[must_use]
    pub fn remote_errors(&self) -> &[RemoteError] {
        match self {
            Self::Remote { errors, .. } | Self::Status { errors, .. } => errors,
            _ => &[],
        }
    }

    /// Message of the transport-level failure, if this error has one.
    #[must_use]
    pub fn transport_message(&self) -> Option<String> {
        match self {
            Self::Network { source, .. } => Some(source.to_string()),
            Self::Status { status, .. } => {
                Some(format!("Response not successful: Received status code {status}"))
            },
            _ => None,
        }
    }
}
