//! Bussola — navigation kernel for the assistant dashboard shell.
//!
//! The front-end renders what this crate resolves: an ordered set of
//! navigation sections derived from the account type, admin flag, and
//! authentication state. Everything visual lives in the rendering layer;
//! this crate only decides which entries exist and in what order.

pub mod nav;
pub mod routes;
