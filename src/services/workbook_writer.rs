//! 写出工作簿：合并表，以及（可选的）各等级单字卡工作簿

use crate::error::{AppError, AppResult};
use crate::models::vocab::CANONICAL_COLUMNS;
use crate::models::{Level, VocabRow};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::{Path, PathBuf};
use tracing::info;

/// 单字卡页面读取的栏位
pub const FLASHCARD_HEADERS: [&str; 4] = ["Lesson", "HanZi", "Chinese", "Hiragana"];

/// 写出合并表
pub fn write_merged(path: &Path, rows: &[VocabRow]) -> AppResult<()> {
    build_merged(rows)
        .and_then(|mut workbook| workbook.save(path))
        .map_err(|source| AppError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })
}

/// 依等级各写出一个单字卡工作簿（`N5.xlsx`、`N4.xlsx`），回传写出的路径
pub fn write_flashcards(dir: &Path, rows: &[VocabRow]) -> AppResult<Vec<PathBuf>> {
    let mut written = Vec::new();
    for level in [Level::N5, Level::N4] {
        let level_rows: Vec<&VocabRow> = rows.iter().filter(|r| r.level == level).collect();
        if level_rows.is_empty() {
            continue;
        }

        let path = dir.join(format!("{}.xlsx", level));
        build_flashcards(&level_rows)
            .and_then(|mut workbook| workbook.save(&path))
            .map_err(|source| AppError::WriteFailed {
                path: path.clone(),
                source,
            })?;
        info!("单字卡 {}: {} 笔 -> {}", level, level_rows.len(), path.display());
        written.push(path);
    }
    Ok(written)
}

fn build_merged(rows: &[VocabRow]) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    write_headers(sheet, &CANONICAL_COLUMNS, &header_format)?;

    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        sheet.write_string(r, 0, &row.kanji)?;
        sheet.write_string(r, 1, &row.reading)?;
        sheet.write_string(r, 2, &row.meaning)?;
        sheet.write_number(r, 3, f64::from(row.lesson))?;
        sheet.write_string(r, 4, row.level.name())?;
    }
    Ok(workbook)
}

fn build_flashcards(rows: &[&VocabRow]) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    write_headers(sheet, &FLASHCARD_HEADERS, &header_format)?;

    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        sheet.write_number(r, 0, f64::from(row.lesson))?;
        sheet.write_string(r, 1, &row.kanji)?;
        sheet.write_string(r, 2, &row.meaning)?;
        sheet.write_string(r, 3, &row.reading)?;
    }
    Ok(workbook)
}

fn write_headers(sheet: &mut Worksheet, headers: &[&str], format: &Format) -> Result<(), XlsxError> {
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, format)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::load_first_sheet;

    fn rows() -> Vec<VocabRow> {
        vec![
            VocabRow::new("水", "みず", "水", 1, Level::N5),
            VocabRow::new("火", "ひ", "火", 2, Level::N4),
        ]
    }

    #[test]
    fn merged_workbook_has_canonical_header_and_numeric_lesson() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("合併_漢字詞語表.xlsx");
        write_merged(&path, &rows()).unwrap();

        let raw = load_first_sheet(&path).unwrap();
        assert_eq!(raw.headers, CANONICAL_COLUMNS.to_vec());
        assert_eq!(raw.rows[0], vec!["水", "みず", "水", "1", "N5"]);
        assert_eq!(raw.rows[1], vec!["火", "ひ", "火", "2", "N4"]);
    }

    #[test]
    fn flashcards_are_split_by_level() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_flashcards(dir.path(), &rows()).unwrap();
        assert_eq!(
            written,
            vec![dir.path().join("N5.xlsx"), dir.path().join("N4.xlsx")]
        );

        let n4 = load_first_sheet(&dir.path().join("N4.xlsx")).unwrap();
        assert_eq!(n4.headers, FLASHCARD_HEADERS.to_vec());
        assert_eq!(n4.rows, vec![vec!["2", "火", "火", "ひ"]]);
    }

    #[test]
    fn missing_level_writes_no_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let only_n5 = vec![VocabRow::new("水", "みず", "水", 1, Level::N5)];
        let written = write_flashcards(dir.path(), &only_n5).unwrap();
        assert_eq!(written.len(), 1);
        assert!(!dir.path().join("N4.xlsx").exists());
    }

    #[test]
    fn unwritable_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("out.xlsx");
        let err = write_merged(&path, &rows()).unwrap_err();
        assert!(matches!(err, AppError::WriteFailed { .. }));
    }
}
