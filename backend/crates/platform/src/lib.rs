//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, salted PHC output)
//! - Signed bearer tokens (HMAC-SHA256, time-limited claims)
//! - `Authorization: Bearer` header extraction

pub mod bearer;
pub mod password;
pub mod token;
