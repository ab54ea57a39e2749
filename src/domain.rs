pub mod ports;
pub mod user;
