//! UDP transport for DMX packets

use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};

/// Outbound datagram transport used by the senders.
///
/// Implementations hand one packet to the network and report how many bytes
/// were accepted. Delivery is never confirmed.
pub trait DmxTransport {
    fn send_to(&self, packet: &[u8], target: SocketAddr) -> io::Result<usize>;
}

impl DmxTransport for UdpSocket {
    fn send_to(&self, packet: &[u8], target: SocketAddr) -> io::Result<usize> {
        UdpSocket::send_to(self, packet, target)
    }
}

/// Open a UDP socket on an ephemeral port able to reach `destination`.
///
/// IPv4 sockets always get `SO_BROADCAST`; directed broadcasts such as
/// `10.20.255.255` cannot be told apart from unicast without the netmask.
pub fn open_socket(destination: &SocketAddr) -> io::Result<UdpSocket> {
    let socket = match destination {
        SocketAddr::V4(_) => UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))?,
        SocketAddr::V6(_) => UdpSocket::bind((Ipv6Addr::UNSPECIFIED, 0))?,
    };

    if destination.is_ipv4() {
        socket.set_broadcast(true)?;
    }

    Ok(socket)
}
