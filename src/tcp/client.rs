// Crate
use crate::error::Error;
use crate::tcp::{Config, COIL_QUANTITY};

// External
use log::debug;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::lookup_host;
use tokio::time::timeout;
use tokio_modbus::client::Context;
use tokio_modbus::prelude::{tcp, Reader, Slave};
use tokio_modbus::Address;

/// Modbus TCP client holding at most one connection
pub struct Client {
    config: Config,
    connection: Option<Context>,
}

impl Client {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            connection: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.connection.is_some()
    }

    fn timeout(&self) -> Duration {
        Duration::from_millis(self.config.timeout_ms)
    }

    async fn resolve(&self) -> Result<Vec<SocketAddr>, Error> {
        let host = self.config.host.as_str();
        let addrs = timeout(self.timeout(), lookup_host((host, self.config.port)))
            .await
            .map_err(|_| Error::TimedOut(self.config.timeout_ms))?
            .map_err(|source| Error::Resolve {
                host: str!(host),
                source,
            })?
            .collect::<Vec<_>>();
        if addrs.is_empty() {
            Err(Error::NoAddress(str!(host)))
        } else {
            Ok(addrs)
        }
    }

    /// Open the connection
    ///
    /// Every resolved address is tried in order. The error of the last attempt is returned if
    /// none of them accepts the connection.
    pub async fn open(&mut self) -> Result<(), Error> {
        let slave = Slave(self.config.unit_id);
        let mut last = Error::NoAddress(self.config.host.clone());
        for addr in self.resolve().await? {
            debug!("Connecting to {addr} with unit id {}", self.config.unit_id);
            match timeout(self.timeout(), tcp::connect_slave(addr, slave)).await {
                Ok(Ok(context)) => {
                    debug!("Modbus TCP connected to {addr}");
                    self.connection = Some(context);
                    return Ok(());
                }
                Ok(Err(source)) => {
                    debug!("Modbus TCP failed to connect to {addr}. [{source}]");
                    last = Error::Connect { addr, source };
                }
                Err(_) => {
                    debug!(
                        "Modbus TCP connect to {addr} timed out after {} ms",
                        self.config.timeout_ms
                    );
                    last = Error::TimedOut(self.config.timeout_ms);
                }
            }
        }
        Err(last)
    }

    /// Read the single coil at `address`
    pub async fn read_coil(&mut self, address: Address) -> Result<bool, Error> {
        let timeout_ms = self.config.timeout_ms;
        let duration = self.timeout();
        let context = self.connection.as_mut().ok_or(Error::NotConnected)?;
        debug!("Read coil at {address} ({address:#06X})");
        let coils = timeout(duration, context.read_coils(address, COIL_QUANTITY))
            .await
            .map_err(|_| Error::TimedOut(timeout_ms))???;
        coils.first().copied().ok_or(Error::EmptyResponse)
    }
}
