//! Service facade: one method per remote operation.
//!
//! Every public method takes the request's `Caller` and authorizes it against the
//! operation's access rule before touching the database. Business outcomes, including
//! missing records and rejected input, are returned as `Ok(ItemResult)`; only
//! authorization failures and unexpected faults are `Err(AppError)`. Mutations are
//! committed before the method returns.

pub mod application_user;
pub mod game;
pub mod genre;
pub mod identity;
pub mod login;
pub mod review;
pub mod tag;
pub mod upload;

#[cfg(test)]
mod test;
