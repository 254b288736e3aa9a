pub mod client;

use clap::Args;
use tokio_modbus::{Address, Quantity, SlaveId};

/// Port of the Modbus TCP server.
pub const PORT: u16 = 502;

/// Unit id addressed on the server.
pub const UNIT_ID: SlaveId = 1;

/// Address of the coil to read.
pub const COIL_ADDRESS: Address = 103;

/// Number of coils requested.
pub const COIL_QUANTITY: Quantity = 1;

/// Default timeout in milliseconds for connect and read.
pub const DEFAULT_TIMEOUT_MS: u64 = 3000;

#[derive(Clone, Debug, Args)]
pub struct Config {
    /// The host running the Modbus TCP server.
    pub host: String,

    #[arg(skip = PORT)]
    pub port: u16,

    #[arg(skip = UNIT_ID)]
    pub unit_id: SlaveId,

    #[arg(skip = COIL_ADDRESS)]
    pub address: Address,

    /// The timeout in milliseconds for each Modbus operation
    #[arg(id = "timeout", short, long, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,
}

impl Config {
    pub fn new(host: &str) -> Self {
        Self {
            host: str!(host),
            port: PORT,
            unit_id: UNIT_ID,
            address: COIL_ADDRESS,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// `<host>:<port>` as used in user facing messages.
    pub fn target(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
