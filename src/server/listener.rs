// Ephemeral listener module
// Binds a wildcard-address TCP listener on an OS-assigned port

use socket2::{Domain, Protocol, Socket, Type};
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use tokio::net::TcpListener;

/// Bind a `TcpListener` on `0.0.0.0:0` and report the resolved address.
///
/// The OS picks a port from its ephemeral range, so two instances in the
/// same process never collide. A bind failure here is fatal to startup:
/// the caller propagates it and the process exits non-zero.
///
/// # Returns
///
/// * `Ok((TcpListener, SocketAddr))` - Bound listener and its actual address
/// * `Err(std::io::Error)` - Failed to create or bind socket
pub fn bind_ephemeral() -> std::io::Result<(TcpListener, SocketAddr)> {
    let addr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 0));

    let socket = Socket::new(Domain::IPV4, Type::STREAM, Some(Protocol::TCP))?;

    // Set non-blocking mode for async compatibility
    socket.set_nonblocking(true)?;

    // Bind port 0: the OS assigns an ephemeral port
    socket.bind(&addr.into())?;

    // Start listening with a backlog queue size of 128
    socket.listen(128)?;

    // Convert socket2::Socket to std::net::TcpListener, then to tokio::net::TcpListener
    let std_listener: std::net::TcpListener = socket.into();
    let listener = TcpListener::from_std(std_listener)?;
    let local_addr = listener.local_addr()?;

    Ok((listener, local_addr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bound_port_is_nonzero() {
        let (_listener, addr) = bind_ephemeral().unwrap();
        assert_ne!(addr.port(), 0);
    }

    #[tokio::test]
    async fn two_binds_never_collide() {
        let (_a, addr_a) = bind_ephemeral().unwrap();
        let (_b, addr_b) = bind_ephemeral().unwrap();
        assert_ne!(addr_a.port(), addr_b.port());
    }
}
