pub mod clock;
pub mod daily;
pub mod sample;
pub mod schedule;
