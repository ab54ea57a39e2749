pub mod config;
pub mod hasher;
pub mod io;
pub mod repository;
