//! JSON view-models returned by the modding history endpoints.
//!
//! These are the shapes the front-end consumes. Optional relation fields are only
//! serialized when the action loaded them.

pub mod api;
pub mod beatmapset;
pub mod discussion;
pub mod event;
pub mod kudosu;
pub mod modding;
pub mod user;
pub mod vote;
