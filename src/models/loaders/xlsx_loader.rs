use crate::error::FileError;
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::Path;

/// 工作表的原始内容：第一列为标题，其余为资料列
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawSheet {
    /// 取得某列某栏的文字，超出范围视为空白
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// 读取工作簿的第一个工作表
///
/// 不论副档名为何都以 xlsx 格式开启，手误的 `.xslx` 档案也能读取。
pub fn load_first_sheet(path: &Path) -> Result<RawSheet, FileError> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|source| FileError::OpenFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| FileError::NoWorksheet {
            path: path.to_path_buf(),
        })?
        .map_err(|source| FileError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or_else(|| FileError::EmptySheet {
            path: path.to_path_buf(),
        })?
        .iter()
        .map(cell_to_string)
        .collect();

    let rows = rows
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    Ok(RawSheet { headers, rows })
}

/// 小于此值的整数值浮点数可以无损转成 i64
const MAX_EXACT_INTEGER: f64 = 1e15;

/// 储存格转文字：整数值的浮点数不带小数点，空白为空字串
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < MAX_EXACT_INTEGER => {
            format!("{}", *f as i64)
        }
        other => other.to_string(),
    }
}
