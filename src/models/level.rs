/// 档名前缀：带此前缀的档案属于 N4
pub const N4_PREFIX: &str = "N4_";

/// 等级枚举
///
/// 排序时 N5 在前、N4 在后（与档案处理顺序一致）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// 初级（默认）
    N5,
    /// 中级（档名以 `N4_` 开头）
    N4,
}

impl Level {
    /// 从档名判断等级
    pub fn from_file_name(name: &str) -> Self {
        if name.starts_with(N4_PREFIX) {
            Level::N4
        } else {
            Level::N5
        }
    }

    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            Level::N5 => "N5",
            Level::N4 => "N4",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_decides_level() {
        assert_eq!(Level::from_file_name("N4_第一課_漢字詞語表.xlsx"), Level::N4);
        assert_eq!(Level::from_file_name("第一課_漢字詞語表.xlsx"), Level::N5);
        // 前缀必须在开头
        assert_eq!(Level::from_file_name("第一課_N4_漢字詞語表.xlsx"), Level::N5);
    }

    #[test]
    fn n5_sorts_before_n4() {
        assert!(Level::N5 < Level::N4);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Level::N4.to_string(), "N4");
        assert_eq!(format!("{}.xlsx", Level::N5), "N5.xlsx");
    }
}
