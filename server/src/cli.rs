use std::{
    net::{IpAddr, Ipv4Addr},
    path::PathBuf,
};

use clap::{Parser, Subcommand};
use dns_codec::RecordType;

use crate::logging::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "dns_server")]
#[command(version)]
#[command(about = "Authoritative DNS server answering A queries from a flat zone file")]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Answer queries over UDP from a zone file
    Serve {
        /// Zone file path
        #[arg(short, long, value_name = "FILE")]
        zone: PathBuf,

        /// Bind address
        #[arg(short, long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
        bind: IpAddr,

        /// DNS server port
        #[arg(short, long, default_value_t = 53)]
        port: u16,
    },

    /// Send one query and print the reply
    Query {
        /// Name to look up
        name: String,

        /// Server address
        #[arg(short, long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
        server: IpAddr,

        /// Server port
        #[arg(short, long, default_value_t = 53)]
        port: u16,

        /// Record type, by name or number
        #[arg(short = 't', long = "type", default_value = "A")]
        record_type: RecordType,

        /// Clear the RD flag
        #[arg(long)]
        no_recursion: bool,
    },
}
