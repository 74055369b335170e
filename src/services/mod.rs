pub mod foods;
pub mod memory;
