pub mod compute;
pub mod depth;
