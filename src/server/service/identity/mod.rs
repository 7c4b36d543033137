//! Local identity layer: password hashing, credential policy and bearer tokens.
//!
//! The login and account services only consume the pass/fail outcome of these helpers
//! and forward it into an `ItemResult`.

pub mod password;
pub mod token;
