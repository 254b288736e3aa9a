//! Error types.

use std::io;
use std::net::SocketAddr;

use thiserror::Error;
use tokio_modbus::ExceptionCode;

/// Error type of the coil reader.
#[derive(Debug, Error)]
pub enum Error {
    /// The host name could not be resolved.
    #[error("failed to resolve {host}: {source}")]
    Resolve {
        host: String,
        #[source]
        source: io::Error,
    },

    /// Resolution succeeded but yielded no socket address.
    #[error("no address found for {0}")]
    NoAddress(String),

    /// The TCP connection could not be established.
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    /// Connect or request did not complete in time.
    #[error("timed out after {0} ms")]
    TimedOut(u64),

    /// Protocol or transport failure while processing the request.
    #[error("transport: {0}")]
    Transport(#[from] tokio_modbus::Error),

    /// The server responded with a _Modbus_ exception.
    #[error("exception: {0}")]
    Exception(ExceptionCode),

    /// The response carried no coil value.
    #[error("empty response")]
    EmptyResponse,

    /// A request was issued on a client without connection.
    #[error("not connected")]
    NotConnected,

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<ExceptionCode> for Error {
    fn from(code: ExceptionCode) -> Self {
        Error::Exception(code)
    }
}
