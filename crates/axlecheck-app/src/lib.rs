//! Application service layer - config, logging, batch evaluation, export

pub mod config;
pub mod export;
pub mod logging;
pub mod service;
