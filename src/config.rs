use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// 默认配置文件名（位于当前目录）
pub const DEFAULT_CONFIG_FILE: &str = "vocab_merge.toml";

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 放置课次档案的资料夹
    pub data_dir: PathBuf,
    /// 合并后的输出档名（相对于 data_dir）
    pub output_file: String,
    /// 档名样式（同时支援 .xlsx 与常见手误 .xslx）
    pub patterns: Vec<String>,
    /// 是否另外输出各等级的单字卡工作簿（N5.xlsx / N4.xlsx）
    pub export_flashcards: bool,
    /// 单字卡工作簿的输出资料夹，未设定时使用 data_dir
    pub flashcard_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            output_file: "合併_漢字詞語表.xlsx".to_string(),
            patterns: vec![
                "第*課_漢字詞語表.xlsx".to_string(),
                "第*課_漢字詞語表.xslx".to_string(),
                "N4_第*課_漢字詞語表.xlsx".to_string(),
                "N4_第*課_漢字詞語表.xslx".to_string(),
            ],
            export_flashcards: false,
            flashcard_dir: None,
        }
    }
}

impl Config {
    /// 以 data_dir 建立配置，其他栏位使用默认值
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// 从 TOML 文件加载配置，缺少的栏位使用默认值
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 加载配置：指定路径优先，否则尝试默认配置文件，都没有则用默认值
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// 合并结果的完整输出路径
    pub fn output_path(&self) -> PathBuf {
        self.data_dir.join(&self.output_file)
    }

    /// 单字卡工作簿的输出资料夹
    pub fn flashcard_dir(&self) -> &Path {
        self.flashcard_dir.as_deref().unwrap_or(&self.data_dir)
    }
}
