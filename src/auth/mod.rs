//! Authentication: registration, login, and password hashing.

mod password;
mod service;

pub use password::{hash_password, verify_password};
pub use service::{UserDescriptor, login, register};
