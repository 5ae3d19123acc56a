pub mod appointment;
pub mod client;
pub mod service;

pub use appointment::*;
pub use client::*;
pub use service::*;
