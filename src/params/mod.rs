pub mod registry;
pub mod snapshot;
pub mod strings;
