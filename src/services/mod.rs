pub mod file_locator;
pub mod merger;
pub mod numeral;
pub mod row_normalizer;
pub mod workbook_writer;

pub use file_locator::{locate_files, SourceFile};
pub use merger::{merge, MergedTable};
pub use numeral::{chinese_numeral_to_int, extract_lesson_from_name};
pub use row_normalizer::read_one_excel;
pub use workbook_writer::{write_flashcards, write_merged};
