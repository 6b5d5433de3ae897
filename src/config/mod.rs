//! Configuration management
//!
//! Defaults used by the command line tool when it builds QR payloads: the
//! target network, the chain id and output formatting. The library itself
//! never reads configuration.

pub mod settings;

pub use settings::{Config, Settings, GLOBAL_CONFIG};
