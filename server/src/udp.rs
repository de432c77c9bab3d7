use std::{
    io,
    net::{Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket},
    time::Duration,
};

use anyhow::{bail, Context};
use dns_codec::{
    build_query, constants::UDP_DNS_MESSAGE_SIZE, handle_datagram, wire::read_u16, DNSMessage,
    RecordType, ZoneLookup,
};
use tracing::{debug, warn};

const QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Answers queries on `socket` forever, one datagram at a time.
pub fn serve<Z: ZoneLookup + ?Sized>(socket: &UdpSocket, zone: &Z) -> ! {
    let mut buf = [0; UDP_DNS_MESSAGE_SIZE];

    loop {
        if let Err(err) = serve_one(socket, zone, &mut buf) {
            warn!(error = %err, "udp i/o failed");
        }
    }
}

/// Receives one datagram and sends the reply, if there is one.
pub fn serve_one<Z: ZoneLookup + ?Sized>(
    socket: &UdpSocket,
    zone: &Z,
    buf: &mut [u8],
) -> io::Result<()> {
    let (len, peer) = socket.recv_from(buf)?;
    debug!(%peer, len, "datagram received");

    if let Some(reply) = handle_datagram(&buf[..len], zone) {
        socket.send_to(&reply, peer)?;
    }

    Ok(())
}

/// Sends a single query to `server` and waits for the matching reply.
pub fn send_query(
    server: SocketAddr,
    domain_name: &str,
    record_type: RecordType,
    flags: u16,
) -> anyhow::Result<DNSMessage> {
    let query = build_query(domain_name, record_type, flags)?;

    let local: SocketAddr = match server {
        SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
        SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
    };
    let socket = UdpSocket::bind(local).context("Couldn't bind to address")?;
    socket.set_read_timeout(Some(QUERY_TIMEOUT))?;
    socket
        .send_to(&query, server)
        .with_context(|| format!("sending query to {}", server))?;

    let mut response_buffer = [0; UDP_DNS_MESSAGE_SIZE];
    let (len, _) = socket
        .recv_from(&mut response_buffer)
        .with_context(|| format!("no reply from {}", server))?;

    let reply = DNSMessage::from_bytes(&response_buffer[..len])?;
    let id = read_u16(&query, 0);
    if reply.header().id() != id {
        bail!(
            "reply ID 0x{:04X} does not match query ID 0x{:04X}",
            reply.header().id(),
            id
        );
    }

    Ok(reply)
}
