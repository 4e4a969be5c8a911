pub mod app;
pub mod counter;
pub mod dom;
pub mod harness;
pub mod pattern;
