pub mod responsive;
pub mod theme;
