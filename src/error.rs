use std::path::PathBuf;
use thiserror::Error;

/// 应用程序错误类型（致命错误，终止整个运行）
#[derive(Debug, Error)]
pub enum AppError {
    /// 没有任何文件符合样式
    #[error("找不到任何符合样式的档案 (目录: {dir}, 样式: {patterns:?})，请确认档名与资料夹位置")]
    NoFilesFound { dir: String, patterns: Vec<String> },

    /// glob 样式不合法
    #[error("档名样式不合法: {pattern}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// 所有档案都读取失败
    #[error("没有任何档案成功读取 (失败 {failed} 个)")]
    NothingToMerge { failed: usize },

    /// 写出合并结果失败
    #[error("写出档案失败 ({path}): {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

/// 单个档案的错误（可恢复，该档案被排除）
#[derive(Debug, Error)]
pub enum FileError {
    /// 无法打开工作簿
    #[error("无法开启工作簿 ({path}): {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: calamine::XlsxError,
    },

    /// 工作簿中没有工作表
    #[error("工作簿中没有工作表: {path}")]
    NoWorksheet { path: PathBuf },

    /// 工作表为空（连标题列都没有）
    #[error("工作表为空: {path}")]
    EmptySheet { path: PathBuf },

    /// 缺少必要栏位
    #[error("{file} 缺少栏位：{missing:?}，实际栏位={actual:?}")]
    MissingColumns {
        file: String,
        missing: Vec<String>,
        actual: Vec<String>,
    },

    /// 课次解析失败
    #[error(transparent)]
    Lesson(#[from] LessonParseError),
}

/// 课次解析错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LessonParseError {
    /// 档名中没有「第…課」
    #[error("档名中找不到『第…課』：{name}")]
    NoLessonMarker { name: String },

    /// 数字超出范围
    #[error("课次数字超出范围：{numeral}")]
    Overflow { numeral: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_message_lists_both_sides() {
        let err = FileError::MissingColumns {
            file: "第一課_漢字詞語表.xlsx".to_string(),
            missing: vec!["平假名".to_string()],
            actual: vec!["漢字".to_string(), "中文意思".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("第一課_漢字詞語表.xlsx"));
        assert!(msg.contains("平假名"));
        assert!(msg.contains("中文意思"));
    }

    #[test]
    fn lesson_error_is_transparent() {
        let err: FileError = LessonParseError::NoLessonMarker {
            name: "abc.xlsx".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "档名中找不到『第…課』：abc.xlsx");
    }
}
