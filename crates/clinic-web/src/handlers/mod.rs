pub mod register;
pub mod schedule;
