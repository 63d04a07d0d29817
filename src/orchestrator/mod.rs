//! 编排层（Orchestration Layer）
//!
//! ```text
//! batch_processor (处理 Vec<SourceFile>，合并写出)
//!     ↓
//! lesson_processor (处理单个课次档案)
//!     ↓
//! services (能力层：locate / numeral / normalize / merge / write)
//!     ↓
//! models (资料与工作簿读取)
//! ```

pub mod batch_processor;
pub mod lesson_processor;

pub use batch_processor::{App, RunSummary};
pub use lesson_processor::{process_file, FileOutcome};
