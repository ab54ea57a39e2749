pub mod argon2_hasher;
pub mod console;
pub mod error_log;
pub mod sqlite_store;
pub mod user_store;
