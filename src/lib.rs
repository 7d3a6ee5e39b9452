pub mod api;
pub mod cli;
pub mod core;
pub mod provider;
pub mod scheduling;
pub mod session;
