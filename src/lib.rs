pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
