pub mod answer_extractor;
pub mod block_segmenter;
pub mod explanation_collector;
pub mod option_collector;
pub mod output_writer;
pub mod question_text;

pub use answer_extractor::{find_answer_line, resolve_answer_line, AnswerLine};
pub use block_segmenter::split_blocks;
pub use explanation_collector::{collect_explanation, merge_explanation};
pub use option_collector::{collect_options, OptionCollection};
pub use output_writer::OutputWriter;
pub use question_text::{collect_question_text, fallback_question_text};
