//! HTTP handlers, one per remote operation.
//!
//! Every handler answers `POST` with a JSON result envelope. Parameters arrive as a JSON
//! body, except for image uploads which are multipart. Handlers hold no rules of their own;
//! authorization and validation happen in the service they call.

pub mod application_user;
pub mod game;
pub mod genre;
pub mod login;
pub mod review;
pub mod tag;
