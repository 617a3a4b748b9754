//! Core application modules
//!
//! This module contains configuration, constants, logging, the provider
//! transports and the model client.

pub mod client;
pub mod config;
pub mod constants;
pub mod logging;
pub mod provider;
pub mod providers;
