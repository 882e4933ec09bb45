pub mod simli;
pub mod structs;
