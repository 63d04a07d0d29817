//! 栏位整理 - 读取单一课次档案并转为标准栏位

use crate::error::FileError;
use crate::models::vocab::EXPECTED_COLUMNS;
use crate::models::{load_first_sheet, Level, RawSheet, VocabRow};
use crate::services::numeral::extract_lesson_from_name;
use std::path::Path;
use tracing::debug;

/// 读取一个课次档案，回传带课次与等级的单字列表
pub fn read_one_excel(path: &Path) -> Result<Vec<VocabRow>, FileError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let sheet = load_first_sheet(path)?;
    normalize_sheet(&file_name, &sheet)
}

/// 将原始工作表整理成标准栏位
pub fn normalize_sheet(file_name: &str, sheet: &RawSheet) -> Result<Vec<VocabRow>, FileError> {
    // 去除栏名左右空白
    let headers: Vec<String> = sheet.headers.iter().map(|h| h.trim().to_string()).collect();

    let [kanji, reading, meaning] = map_columns(&headers).map_err(|missing| {
        FileError::MissingColumns {
            file: file_name.to_string(),
            missing,
            actual: headers.clone(),
        }
    })?;

    let lesson = extract_lesson_from_name(file_name)?;
    let level = Level::from_file_name(file_name);

    let rows: Vec<VocabRow> = (0..sheet.rows.len())
        .map(|r| {
            VocabRow::new(
                sheet.cell(r, kanji),
                sheet.cell(r, reading),
                sheet.cell(r, meaning),
                lesson,
                level,
            )
        })
        .filter(|row| !row.is_blank())
        .collect();

    debug!(
        "{}: {} 列 (第{}課, {})",
        file_name,
        rows.len(),
        lesson,
        level
    );
    Ok(rows)
}

/// 把期望栏位对应到来源栏位的索引
///
/// 先找去掉空白后完全相同的栏位，再找包含关键词的栏位；
/// 同一个来源栏位只会被对应一次。失败时回传缺少的栏位名称。
fn map_columns(headers: &[String]) -> Result<[usize; 3], Vec<String>> {
    let mut claimed: Vec<usize> = Vec::with_capacity(EXPECTED_COLUMNS.len());
    let mut missing = Vec::new();

    for need in EXPECTED_COLUMNS {
        let free = |i: &usize| !claimed.contains(i);
        let exact = (0..headers.len())
            .filter(free)
            .find(|&i| strip_spaces(&headers[i]) == need);
        let found = exact.or_else(|| {
            (0..headers.len())
                .filter(free)
                .find(|&i| headers[i].contains(need))
        });

        match found {
            Some(i) => claimed.push(i),
            None => missing.push(need.to_string()),
        }
    }

    if !missing.is_empty() {
        return Err(missing);
    }
    Ok([claimed[0], claimed[1], claimed[2]])
}

/// 去掉半形与全形空白
fn strip_spaces(s: &str) -> String {
    s.chars().filter(|c| *c != ' ' && *c != '\u{3000}').collect()
}
