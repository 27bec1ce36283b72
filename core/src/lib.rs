pub mod code;
pub mod config;
pub mod helpers;
pub mod sanitize;

pub mod error;
