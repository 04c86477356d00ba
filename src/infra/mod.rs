pub mod config;
pub mod control;
pub mod keys;
pub mod logging;
pub mod monitors;
pub mod pointer;
pub mod transport;
