//! Value Object Module

pub mod amount;
pub mod coin_balance;
pub mod operation;
pub mod user_id;
pub mod user_name;
