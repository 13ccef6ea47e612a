pub mod config;
pub mod logging;

pub mod endpoint;
pub mod form;
pub mod links;
pub mod payload;
pub mod transport;
