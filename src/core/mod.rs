pub mod aggregate;
pub mod calculator;
pub mod logic;

pub use aggregate::aggregate;
pub use logic::Core;
