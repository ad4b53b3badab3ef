use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Failures of a single client exchange.
///
/// None of them is recovered locally; the connection is still closed on
/// every path before the error reaches the caller.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to connect to {address}")]
    Connection {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to send request")]
    Transmission(#[source] io::Error),

    #[error("failed to receive reply")]
    Receive(#[source] io::Error),

    #[error("reply is not valid UTF-8")]
    Decode(#[from] FromUtf8Error),

    #[error("failed to write reply to output")]
    Output(#[source] io::Error),
}
