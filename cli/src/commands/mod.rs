//! One handler module per resource. Every handler takes the session, the
//! global flags and the writer it prints to, so tests can capture output.

pub mod application;
pub mod cartridge;
pub mod dispatch;
pub mod init;
pub mod kubernetes;
pub mod metadata;
pub mod partition;
pub mod policy;
pub mod service;
pub mod shared;
pub mod subscription;
pub mod tenant;
pub mod user;
