pub mod loader;
pub mod parse;
pub mod record;
