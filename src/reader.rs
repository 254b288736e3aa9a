//! Connect, check, read and print a single coil.

use crate::error::Error;
use crate::tcp::client::Client;
use crate::tcp::Config;

use log::{debug, info};
use std::io::Write;

/// Result of a completed run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The coil was read and printed.
    Value(bool),
    /// The connection could not be opened; the failure message was printed.
    NotConnected,
}

/// Exit status after the coil was printed or the connection failed.
pub const EXIT_OK: u8 = 0;

/// Exit status when the read failed after the connection was opened.
pub const EXIT_READ_FAILED: u8 = 1;

/// Process exit status for the result of [`run`]
pub fn exit_status<E>(result: &Result<Outcome, E>) -> u8 {
    match result {
        Ok(Outcome::Value(_)) | Ok(Outcome::NotConnected) => EXIT_OK,
        Err(_) => EXIT_READ_FAILED,
    }
}

/// Text printed for a coil value, `True` or `False`.
pub fn coil_text(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Message printed when the connection can not be opened.
pub fn no_connection_message(config: &Config) -> String {
    format!("No connct to {}", config.target())
}

/// Run the coil reader against the server described by `config`
///
/// Everything meant for the user is written to `out`. A failed connect is not an error, it is
/// reported as `Outcome::NotConnected`. Errors after the connection was opened are returned.
pub async fn run<W: Write>(config: Config, out: &mut W) -> Result<Outcome, Error> {
    let mut client = Client::new(config);

    if !client.is_open() {
        if let Err(e) = client.open().await {
            info!("Open connection to {} failed. [{}]", client.config().target(), e);
            writeln!(out, "{}", no_connection_message(client.config()))?;
        }
    }

    if !client.is_open() {
        return Ok(Outcome::NotConnected);
    }

    let address = client.config().address;
    let value = client.read_coil(address).await?;
    debug!("Coil {address} of {} is {value}", client.config().target());
    writeln!(out, "{}", coil_text(value))?;
    Ok(Outcome::Value(value))
}
