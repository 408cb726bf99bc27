pub mod discovery;
pub mod error;
pub mod loader;
pub mod matcher;
pub mod normalize;
pub mod schema;
pub mod store;

pub use error::LoadError;
pub use schema::{ColumnSchema, LanguageProfile, MatchStrategy};
pub use store::{GlossaryStore, LoadReport};
