pub mod entry;
pub mod language;
pub mod settings;
pub mod table;
