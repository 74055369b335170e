pub mod food;
