//! Read a single coil from a Modbus TCP server.
//!
//! The connection uses port 502 and unit id 1 and reads the coil at address 103. Framing and
//! encoding are handled by `tokio-modbus`.

#[macro_use]
pub mod util;

pub mod error;
pub mod reader;
pub mod tcp;

pub use error::Error;
pub use reader::{run, Outcome};
pub use tcp::Config;
