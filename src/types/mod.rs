pub mod change;
pub mod errors;
pub mod unit;
