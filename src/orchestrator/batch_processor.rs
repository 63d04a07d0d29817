//! 批量课次处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **档案搜寻**：依样式找出所有课次档案并排序
//! 2. **逐档读取**：依序处理，单档失败只记录、不中断
//! 3. **合并写出**：去重、排序后写出合并表（与可选的单字卡工作簿）
//! 4. **统计输出**：汇总成功/失败与各课列数
//!
//! 致命错误（找不到档案、全部失败、合并表写出失败）发生时不会写出任何档案；
//! 单字卡写出失败只记录警告，不影响执行结果。

use crate::config::Config;
use crate::error::AppResult;
use crate::orchestrator::lesson_processor::{self, FileOutcome};
use crate::services::{locate_files, merge, write_flashcards, write_merged};
use crate::utils::logging;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
}

/// 一次执行的摘要
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub files_found: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub rows_before_dedup: usize,
    pub rows_written: usize,
    pub output_path: PathBuf,
    pub flashcard_paths: Vec<PathBuf>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 运行应用主逻辑
    pub fn run(&self) -> AppResult<RunSummary> {
        logging::log_startup(&self.config);

        let files = locate_files(&self.config.data_dir, &self.config.patterns)?;
        let files_found = files.len();
        logging::log_files_found(files_found);

        let outcomes: Vec<FileOutcome> = files
            .into_iter()
            .map(lesson_processor::process_file)
            .collect();
        let (frames, failures) = lesson_processor::partition_outcomes(outcomes);
        let succeeded = frames.len();
        let failed = failures.len();

        let table = merge(frames, failed).inspect_err(|e| error!("❌ {}", e))?;
        logging::log_lesson_counts(&table.lesson_counts());

        let output_path = self.config.output_path();
        write_merged(&output_path, &table.rows)?;

        // 单字卡写出失败只记录，合并表已经写出
        let flashcard_paths = if self.config.export_flashcards {
            write_flashcards(self.config.flashcard_dir(), &table.rows).unwrap_or_else(|e| {
                warn!("⚠️ 单字卡写出失败: {}", e);
                Vec::new()
            })
        } else {
            Vec::new()
        };

        if !failures.is_empty() {
            info!("以下档案未纳入合并:");
            for (file, e) in &failures {
                info!("  - {}: {}", file.file_name, e);
            }
        }

        logging::print_final_stats(
            succeeded,
            failed,
            table.rows.len(),
            table.duplicates_removed(),
            &output_path,
        );

        Ok(RunSummary {
            files_found,
            succeeded,
            failed,
            rows_before_dedup: table.rows_before_dedup,
            rows_written: table.rows.len(),
            output_path,
            flashcard_paths,
        })
    }
}
