pub mod pick;
pub mod start;
