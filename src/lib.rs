//! Game catalog with a remote operation API.
//!
//! `model` holds the wire types shared by both halves: transfer objects, result envelopes,
//! operation parameters and the operation table. The `server` feature adds the Axum backend,
//! the `client` feature adds a typed stub that calls it.

pub mod model;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "server")]
pub mod server;
