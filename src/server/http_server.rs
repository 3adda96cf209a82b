use may::coroutine::JoinHandle;
use may_minihttp::HttpService;
use std::any::Any;
use std::io;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::thread;
use std::time::Duration;
use tracing::{debug, error};

/// Wrapper around may_minihttp's HTTP server
pub struct HttpServer<T>(pub T);

/// Handle to a running HTTP server
pub struct ServerHandle {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl ServerHandle {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Wait for the server to be ready to accept connections
    ///
    /// Polls the address with TCP connects.
    ///
    /// # Errors
    ///
    /// Returns `TimedOut` if the server doesn't accept within ~250ms
    /// (50 attempts × 5ms).
    pub fn wait_ready(&self) -> io::Result<()> {
        for _ in 0..50 {
            if TcpStream::connect(self.addr).is_ok() {
                return Ok(());
            }
            thread::sleep(Duration::from_millis(5));
        }
        Err(io::Error::new(io::ErrorKind::TimedOut, "server not ready"))
    }

    /// Cancel the accept coroutine and wait for it to finish.
    ///
    /// Cancellation unwinds the coroutine, so a failed join is expected. Only
    /// a panic carrying a message is logged as an error.
    pub fn stop(self) {
        let addr = self.addr;
        // SAFETY: cancel() is unsafe in may; we own the handle and join it
        // immediately, so nothing observes the cancelled coroutine.
        unsafe {
            self.handle.coroutine().cancel();
        }
        if let Err(payload) = self.handle.join() {
            match panic_message(payload.as_ref()) {
                Some(message) => error!(
                    addr = %addr,
                    panic = message,
                    "Server coroutine panicked during shutdown"
                ),
                None => debug!(addr = %addr, "Server coroutine cancelled"),
            }
        }
    }

    /// Block until the server coroutine exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the server coroutine panicked.
    pub fn join(self) -> std::thread::Result<()> {
        self.handle.join()
    }
}

/// Text of a `panic!` payload; `None` for non-string payloads such as may's
/// cancellation marker.
fn panic_message(payload: &(dyn Any + Send)) -> Option<&str> {
    payload
        .downcast_ref::<&'static str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
}

impl<T: HttpService + Clone + Send + Sync + 'static> HttpServer<T> {
    /// Start the HTTP server on the given address
    ///
    /// # Errors
    ///
    /// Returns an error if the address is invalid or the port cannot be bound.
    pub fn start<A: ToSocketAddrs>(self, addr: A) -> io::Result<ServerHandle> {
        let addr = addr
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "invalid address"))?;
        let handle = may_minihttp::HttpServer(self.0).start(addr)?;
        Ok(ServerHandle { addr, handle })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_message_reads_string_payloads() {
        let payload = std::panic::catch_unwind(|| panic!("accept loop failed")).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), Some("accept loop failed"));

        let owned: Box<dyn Any + Send> = Box::new(format!("port {}", 3000));
        assert_eq!(panic_message(owned.as_ref()), Some("port 3000"));
    }

    #[test]
    fn test_panic_message_ignores_other_payloads() {
        let payload: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(panic_message(payload.as_ref()), None);
    }
}
