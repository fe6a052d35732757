pub mod health;
pub mod memory;
