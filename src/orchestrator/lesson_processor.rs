//! 单个课次档案处理器 - 编排层
//!
//! 读取一个档案，输出一行成功或失败的讯息。失败不会中断整体流程。

use crate::error::FileError;
use crate::models::VocabRow;
use crate::services::{read_one_excel, SourceFile};
use tracing::{info, warn};

/// 单个档案的处理结果
#[derive(Debug)]
pub struct FileOutcome {
    pub file: SourceFile,
    pub result: Result<Vec<VocabRow>, FileError>,
}

/// 处理单个课次档案
pub fn process_file(file: SourceFile) -> FileOutcome {
    let result = read_one_excel(&file.path);
    match &result {
        Ok(rows) => info!("读取成功：{} ({} 笔)", file.file_name, rows.len()),
        Err(e) => warn!("读取失败：{} -> {}", file.file_name, e),
    }
    FileOutcome { file, result }
}

/// 将处理结果分成成功的资料与失败的档案
pub fn partition_outcomes(outcomes: Vec<FileOutcome>) -> (Vec<Vec<VocabRow>>, Vec<(SourceFile, FileError)>) {
    let mut frames = Vec::new();
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome.result {
            Ok(rows) => frames.push(rows),
            Err(e) => failures.push((outcome.file, e)),
        }
    }
    (frames, failures)
}
