pub mod catalogue_writer;
pub mod warn_writer;

pub use catalogue_writer::{render_catalogue, write_catalogue};
pub use warn_writer::WarnWriter;
