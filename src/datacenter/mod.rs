mod dedicated_server;
mod virtual_server;

pub use dedicated_server::DedicatedServer;
pub use virtual_server::VirtualServer;
