//! Declarative stub configuration: parsing, loading and mounting.

pub mod error;
pub mod loader;
pub mod parser;
pub mod stub;

pub use error::ConfigError;
pub use loader::{load_stub_set, load_stub_sets};
pub use parser::parse_stub_set;
pub use stub::{StubRoute, StubSet};
