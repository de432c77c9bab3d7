use std::net::{SocketAddr, UdpSocket};

use anyhow::Context;
use clap::Parser;
use dns_codec::constants::RECURSION_DESIRED;
use tracing::{info, warn};

mod cli;
mod logging;
mod udp;
mod zone;

use cli::{Cli, Command};
use zone::Zone;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_tracing(&cli.log_level, cli.log_format)?;

    match cli.command {
        Command::Serve { zone, bind, port } => {
            let zone = Zone::load(&zone)
                .with_context(|| format!("loading zone file {}", zone.display()))?;
            info!(
                records = zone.len(),
                default_ttl = zone.default_ttl(),
                "zone loaded"
            );
            if zone.is_empty() {
                warn!("zone has no records, every query will get a name error");
            }

            let socket = UdpSocket::bind((bind, port))
                .with_context(|| format!("binding {}", SocketAddr::new(bind, port)))?;
            info!(addr = %socket.local_addr()?, "listening for queries");

            udp::serve(&socket, &zone)
        }
        Command::Query {
            name,
            server,
            port,
            record_type,
            no_recursion,
        } => {
            let flags = if no_recursion { 0 } else { RECURSION_DESIRED };
            let reply = udp::send_query(SocketAddr::new(server, port), &name, record_type, flags)?;

            print!("{}", reply);
            match reply.decode_answer() {
                Ok(Some(answer)) => println!(
                    "Answer: {}, {}, {}, {}, {}",
                    answer.name(),
                    answer.type_(),
                    answer.class(),
                    answer.ttl(),
                    answer.data()
                ),
                Ok(None) => {}
                Err(err) => warn!(error = %err, "could not decode the answer section"),
            }

            Ok(())
        }
    }
}
