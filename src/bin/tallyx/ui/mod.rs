pub mod counter_button;
pub mod greeting;
