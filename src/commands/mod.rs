pub mod check;
pub mod interactive;
pub mod views;
