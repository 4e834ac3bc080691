//! Error types for the API client.

use crate::transport::TransportError;

/// Errors that can occur when calling the storefront API.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required argument was empty. Raised before any request is sent.
    #[error("{operation}: {} required.", describe_params(.params))]
    MissingArgument {
        operation: &'static str,
        params: Vec<&'static str>,
    },
    /// The request never completed (DNS, connection, TLS).
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The API answered with a non-2xx status. `message` is the body's
    /// `error` field when there is one, otherwise a generic status message.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// A 2xx body that could not be decoded.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// HTTP status for [`Error::Http`], `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn describe_params(params: &[&str]) -> String {
    let quoted: Vec<String> = params.iter().map(|p| format!("'{}'", p)).collect();
    match quoted.as_slice() {
        [] => "nothing is".to_string(),
        [one] => format!("{} is", one),
        [init @ .., last] => format!("{} and {} are", init.join(", "), last),
    }
}
