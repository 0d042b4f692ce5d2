pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod handoff;
pub mod intent;
pub mod message;
pub mod product;
