pub mod encoding;
pub mod glossary;
pub mod settings;
pub mod text;
