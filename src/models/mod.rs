pub mod answer_key;
pub mod catalogue;
pub mod loaders;
pub mod question;
pub mod source;

pub use answer_key::AnswerKey;
pub use catalogue::{Catalogue, Exercise, SourceFile};
pub use loaders::{load_source_text, load_sources_file};
pub use question::{Question, QuestionId};
pub use source::{ParserStrategy, SourceSpec};
