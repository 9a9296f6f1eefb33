//! Error taxonomy for talking to the remote service

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// What can go wrong between us and the remote API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Fatal startup condition: nothing to authenticate with.
    #[error("no access token: set the {0} environment variable")]
    MissingToken(&'static str),

    /// The request reached the service but came back non-2xx.
    #[error("{url} returned HTTP {status}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// The request never produced a usable response.
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body did not have the expected shape. Individual
    /// malformed elements inside a listing are skipped instead of
    /// raising this; see [`decode_each`].
    ///
    /// [`decode_each`]: crate::client::decode_each
    #[error("unexpected response from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
