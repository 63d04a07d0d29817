//! # Vocab Merge
//!
//! 将各课的漢字詞語表（`第一課_漢字詞語表.xlsx` … `N4_第二十課_漢字詞語表.xlsx`）
//! 合并成一个工作表，并新增「第幾課」与「等級」栏位。
//!
//! ## 模块结构
//!
//! - `models/` - 单字资料、等级，以及工作簿读取
//! - `services/` - 档案搜寻、课次解析、栏位整理、合并、写出
//! - `orchestrator/` - 依序处理所有档案并汇总结果
//! - `utils/` - 日志

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, FileError, LessonParseError};
pub use models::{Level, VocabRow};
pub use orchestrator::{App, RunSummary};
pub use utils::logging;
