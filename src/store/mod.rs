//! Client-side state containers.
//!
//! Each store owns one slice of state and changes only through its
//! reducer. The slices are independent; [`crate::context::AppContext`]
//! owns one of each.

pub mod filters;
pub mod movies;
pub mod mvi;
pub mod search;
pub mod theme;
pub mod watchlist;
