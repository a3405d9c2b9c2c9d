pub mod config;
pub mod logging;

pub mod checksum;
pub mod error;
pub mod extract;
pub mod filename;
pub mod har;
pub mod payload;
pub mod report;
pub mod sizefmt;
pub mod sniff;
pub mod writer;
