pub mod core;
pub mod rpc;
pub mod server;
pub mod client;
