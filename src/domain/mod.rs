pub mod command;
pub mod effects;
pub mod error;
pub mod filter;
pub mod page;
pub mod selection;
