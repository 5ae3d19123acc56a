//! # IO Module
//!
//! The boundary between HTTP clients and the domain services. Only the REST
//! API lives here for now.

pub mod rest;

pub use rest::*;
