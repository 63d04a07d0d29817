pub mod level;
pub mod loaders;
pub mod vocab;

pub use level::Level;
pub use loaders::{load_first_sheet, RawSheet};
pub use vocab::{VocabRow, CANONICAL_COLUMNS, EXPECTED_COLUMNS};
