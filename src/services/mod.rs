pub mod roster;
pub mod server;
