pub mod entities;
pub mod role;
pub mod validation;
