use super::level::Level;
use std::cmp::Ordering;

/// 期望的三个文字栏位（会自动对应、修正空白）
pub const EXPECTED_COLUMNS: [&str; 3] = ["漢字", "平假名", "中文意思"];

/// 课次栏位名称
pub const LESSON_COLUMN: &str = "第幾課";

/// 等级栏位名称
pub const LEVEL_COLUMN: &str = "等級";

/// 合并结果的五个标准栏位（等级与课次放最后）
pub const CANONICAL_COLUMNS: [&str; 5] = ["漢字", "平假名", "中文意思", LESSON_COLUMN, LEVEL_COLUMN];

/// 一笔单字资料
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VocabRow {
    /// 漢字
    pub kanji: String,
    /// 平假名
    pub reading: String,
    /// 中文意思
    pub meaning: String,
    /// 第幾課
    pub lesson: u32,
    /// 等級
    pub level: Level,
}

impl VocabRow {
    pub fn new(
        kanji: impl Into<String>,
        reading: impl Into<String>,
        meaning: impl Into<String>,
        lesson: u32,
        level: Level,
    ) -> Self {
        Self {
            kanji: kanji.into(),
            reading: reading.into(),
            meaning: meaning.into(),
            lesson,
            level,
        }
    }

    /// 三个文字栏位是否都为空
    pub fn is_blank(&self) -> bool {
        self.kanji.trim().is_empty()
            && self.reading.trim().is_empty()
            && self.meaning.trim().is_empty()
    }

    /// 合并表的排序：等级、课次、漢字、平假名
    pub fn sort_order(&self, other: &Self) -> Ordering {
        self.level
            .cmp(&other.level)
            .then_with(|| self.lesson.cmp(&other.lesson))
            .then_with(|| self.kanji.cmp(&other.kanji))
            .then_with(|| self.reading.cmp(&other.reading))
    }
}
