//! 档案搜寻
//!
//! 依样式在资料夹中找出所有课次档案，并排成处理顺序：
//! 先 N5（无前缀）依课次递增，再 N4（`N4_` 前缀）依课次递增。

use crate::error::{AppError, AppResult};
use crate::models::Level;
use crate::services::numeral::extract_lesson_from_name;
use glob::Pattern;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// 找到的课次档案
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub file_name: String,
    pub level: Level,
    /// 档名无法解析课次时为 None，留待读取阶段报错
    pub lesson: Option<u32>,
}

impl SourceFile {
    pub fn from_path(path: PathBuf) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let level = Level::from_file_name(&file_name);
        let lesson = extract_lesson_from_name(&file_name).ok();
        Self {
            path,
            file_name,
            level,
            lesson,
        }
    }

    /// 处理顺序：N5 在前，课次递增，无法解析课次的排在同等级最后
    fn order_key(&self) -> (Level, bool, u32, &str) {
        (
            self.level,
            self.lesson.is_none(),
            self.lesson.unwrap_or(0),
            self.file_name.as_str(),
        )
    }
}

/// 在资料夹中找出符合任一样式的档案（去重、排序）
pub fn locate_files(dir: &Path, patterns: &[String]) -> AppResult<Vec<SourceFile>> {
    let escaped_dir = Pattern::escape(&dir.to_string_lossy());
    let mut found: BTreeSet<PathBuf> = BTreeSet::new();

    for pat in patterns {
        let full = format!("{}/{}", escaped_dir.trim_end_matches('/'), pat);
        let paths = glob::glob(&full).map_err(|source| AppError::InvalidPattern {
            pattern: pat.clone(),
            source,
        })?;

        for entry in paths {
            match entry {
                Ok(path) if path.is_file() => {
                    debug!("样式 {} 符合: {}", pat, path.display());
                    found.insert(path);
                }
                Ok(_) => {}
                Err(e) => warn!("无法读取路径 {}: {}", e.path().display(), e.error()),
            }
        }
    }

    if found.is_empty() {
        return Err(AppError::NoFilesFound {
            dir: dir.display().to_string(),
            patterns: patterns.to_vec(),
        });
    }

    let mut files: Vec<SourceFile> = found.into_iter().map(SourceFile::from_path).collect();
    files.sort_by(|a, b| a.order_key().cmp(&b.order_key()));
    Ok(files)
}
