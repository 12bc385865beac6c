pub mod clock;
pub mod reset;
