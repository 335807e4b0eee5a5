pub mod exercise;
pub mod field;
pub mod step;
