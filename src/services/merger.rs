//! 合并 - 串接各档案的资料、去除重复、排序

use crate::error::{AppError, AppResult};
use crate::models::{Level, VocabRow};
use std::collections::{BTreeMap, HashSet};

/// 合并结果
#[derive(Debug, Clone, Default)]
pub struct MergedTable {
    pub rows: Vec<VocabRow>,
    /// 去重前的总列数
    pub rows_before_dedup: usize,
}

impl MergedTable {
    /// 各（等级, 课次）的列数，依排序顺序
    pub fn lesson_counts(&self) -> BTreeMap<(Level, u32), usize> {
        let mut counts = BTreeMap::new();
        for row in &self.rows {
            *counts.entry((row.level, row.lesson)).or_insert(0) += 1;
        }
        counts
    }

    pub fn duplicates_removed(&self) -> usize {
        self.rows_before_dedup - self.rows.len()
    }
}

/// 合并所有成功读取的档案
///
/// 没有任何档案时回传 `NothingToMerge`，`failed` 为失败的档案数。
pub fn merge(frames: Vec<Vec<VocabRow>>, failed: usize) -> AppResult<MergedTable> {
    if frames.is_empty() {
        return Err(AppError::NothingToMerge { failed });
    }

    let merged: Vec<VocabRow> = frames.into_iter().flatten().collect();
    let rows_before_dedup = merged.len();

    let mut rows = drop_duplicates(merged);
    // 稳定排序：依等级、课次、漢字、平假名
    rows.sort_by(VocabRow::sort_order);

    Ok(MergedTable {
        rows,
        rows_before_dedup,
    })
}

/// 去除五个栏位完全相同的重复列，保留第一次出现的
pub fn drop_duplicates(rows: Vec<VocabRow>) -> Vec<VocabRow> {
    let mut seen = HashSet::with_capacity(rows.len());
    rows.into_iter()
        .filter(|row| seen.insert(row.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson_one() -> Vec<VocabRow> {
        vec![
            VocabRow::new("水", "みず", "水", 1, Level::N5),
            VocabRow::new("山", "やま", "山", 1, Level::N5),
        ]
    }

    #[test]
    fn empty_input_is_total_failure() {
        let err = merge(Vec::new(), 3).unwrap_err();
        assert!(matches!(err, AppError::NothingToMerge { failed: 3 }));
    }

    #[test]
    fn dedup_is_idempotent() {
        let once = merge(vec![lesson_one()], 0).unwrap();
        let twice = merge(vec![lesson_one(), lesson_one()], 0).unwrap();
        assert_eq!(once.rows, twice.rows);
        assert_eq!(twice.rows_before_dedup, 4);
        assert_eq!(twice.duplicates_removed(), 2);
    }

    #[test]
    fn rows_differing_only_in_level_are_kept() {
        let rows = vec![
            VocabRow::new("火", "ひ", "火", 1, Level::N4),
            VocabRow::new("火", "ひ", "火", 1, Level::N5),
        ];
        assert_eq!(drop_duplicates(rows).len(), 2);
    }

    #[test]
    fn output_is_sorted_by_level_lesson_kanji_reading() {
        let frames = vec![
            vec![
                VocabRow::new("木", "き", "樹", 2, Level::N5),
                VocabRow::new("日", "ひ", "太陽", 2, Level::N5),
                VocabRow::new("日", "にち", "日", 2, Level::N5),
            ],
            vec![VocabRow::new("会", "かい", "會", 1, Level::N4)],
            vec![VocabRow::new("水", "みず", "水", 1, Level::N5)],
        ];
        let table = merge(frames, 0).unwrap();
        let keys: Vec<(Level, u32, &str, &str)> = table
            .rows
            .iter()
            .map(|r| (r.level, r.lesson, r.kanji.as_str(), r.reading.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                (Level::N5, 1, "水", "みず"),
                (Level::N5, 2, "日", "にち"),
                (Level::N5, 2, "日", "ひ"),
                (Level::N5, 2, "木", "き"),
                (Level::N4, 1, "会", "かい"),
            ]
        );
        assert!(table
            .rows
            .windows(2)
            .all(|w| w[0].sort_order(&w[1]) != std::cmp::Ordering::Greater));
    }

    #[test]
    fn sort_is_stable_on_equal_keys() {
        let frames = vec![vec![
            VocabRow::new("生", "せい", "生命", 3, Level::N5),
            VocabRow::new("生", "せい", "學生", 3, Level::N5),
        ]];
        let table = merge(frames, 0).unwrap();
        assert_eq!(table.rows[0].meaning, "生命");
        assert_eq!(table.rows[1].meaning, "學生");
    }

    #[test]
    fn lesson_counts_follow_sort_order() {
        let frames = vec![
            vec![VocabRow::new("会", "かい", "會", 1, Level::N4)],
            lesson_one(),
        ];
        let table = merge(frames, 0).unwrap();
        let counts: Vec<_> = table.lesson_counts().into_iter().collect();
        assert_eq!(counts, vec![((Level::N5, 1), 2), ((Level::N4, 1), 1)]);
    }
}
