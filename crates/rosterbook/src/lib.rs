//! `rosterbook` - A local student roster manager
//!
//! This library provides the core functionality for keeping a student roster:
//! an ordered record store persisted as a JSON snapshot, and a keyword/year
//! search engine deriving filtered views of it on demand.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod search;
pub mod seed;
pub mod store;
pub mod student;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use search::{search, SearchQuery};
pub use store::RosterStore;
pub use student::{StudentPatch, StudentRecord};
