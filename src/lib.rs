pub mod parser;
pub mod schedule;
pub mod display;
