pub mod arguments;
pub mod files;
pub mod procedures;
