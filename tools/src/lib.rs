//! Command-line generator of fake hashes.
mod config;
mod output;


pub use config::{decode_json, Config, ConfigFile, OutputFormat};
pub use output::{generate, rng, write, Record, Records};
