//! Entity Module

pub mod coin_history;
pub mod user;
