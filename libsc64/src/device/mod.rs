// libsc64/src/device/mod.rs

pub mod builder;
pub mod config;
pub mod dispatcher;
pub mod handle;
pub mod handshake;

pub use builder::DeviceBuilder;
pub use config::DeviceConfig;
pub use dispatcher::Dispatcher;
pub use handle::{Device, Ready, Unsynchronized};
