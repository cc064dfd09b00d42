pub mod document;
pub mod loaders;
pub mod question;

pub use document::{Block, RawDocument};
pub use loaders::{discover_text_files, load_documents, load_text_document};
pub use question::{Answer, ChoiceOption, ParsedQuestion, QuestionRecord};
