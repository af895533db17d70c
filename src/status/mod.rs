pub mod engine;
pub mod result;
