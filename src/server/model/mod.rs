//! Server-side domain models and parameter types.
//!
//! Domain models wrap entity models loaded by the repositories together with the
//! relations an action asked for, and are transformed to DTOs at the controller
//! boundary.

pub mod beatmapset;
pub mod discussion;
pub mod event;
pub mod kudosu;
pub mod modding;
pub mod pagination;
pub mod post;
pub mod privilege;
pub mod search;
pub mod user;
pub mod vote;
