pub mod csv;
pub mod settings;
