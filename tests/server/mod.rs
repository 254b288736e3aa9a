//! In-process Modbus TCP server used by the integration tests

use std::collections::HashMap;
use std::future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::net::TcpListener;
use tokio_modbus::{
    prelude::*,
    server::tcp::{accept_tcp_connection, Server},
};

/// A request as seen by the server
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seen {
    pub slave: SlaveId,
    pub addr: u16,
    pub cnt: u16,
}

#[derive(Clone)]
pub struct CoilService {
    coils: Arc<HashMap<u16, bool>>,
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl tokio_modbus::server::Service for CoilService {
    type Request = SlaveRequest<'static>;
    type Response = Response;
    type Exception = ExceptionCode;
    type Future = future::Ready<Result<Self::Response, Self::Exception>>;

    fn call(&self, req: Self::Request) -> Self::Future {
        let SlaveRequest { slave, request } = req;
        let res = match request {
            Request::ReadCoils(addr, cnt) => {
                self.seen.lock().unwrap().push(Seen { slave, addr, cnt });
                (addr..addr + cnt)
                    .map(|a| self.coils.get(&a).copied())
                    .collect::<Option<Vec<_>>>()
                    .map(Response::ReadCoils)
                    .ok_or(ExceptionCode::IllegalDataAddress)
            }
            _ => Err(ExceptionCode::IllegalFunction),
        };
        future::ready(res)
    }
}

/// Handle to a running test server
pub struct TestServer {
    pub addr: SocketAddr,
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl TestServer {
    /// Start a server on an ephemeral port serving the given coils
    pub async fn start(coils: &[(u16, bool)]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let service = CoilService {
            coils: Arc::new(coils.iter().copied().collect()),
            seen: seen.clone(),
        };
        let server = Server::new(listener);
        tokio::spawn(async move {
            let new_service = |_socket_addr| Ok(Some(service.clone()));
            let on_connected = |stream, socket_addr| async move {
                accept_tcp_connection(stream, socket_addr, new_service)
            };
            let on_process_error = |err| {
                eprintln!("Server error: {err}");
            };
            server.serve(&on_connected, on_process_error).await
        });
        Self { addr, seen }
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }
}
