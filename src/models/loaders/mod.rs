pub mod sources_loader;
pub mod text_loader;

pub use sources_loader::load_sources_file;
pub use text_loader::load_source_text;
