//! Typed client stub for the remote operation API.
//!
//! `ApiClient` performs the HTTP exchange for any operation in the shared operation table.
//! The per-service clients under `api/` wrap it with one method per operation, and
//! `UserSession` keeps a cached view of the signed-in caller for UI code.

pub mod api;
pub mod model;
pub mod session;

#[cfg(all(test, feature = "server"))]
mod test;
