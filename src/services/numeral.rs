//! 课次解析
//!
//! 从档名的「第…課」中取出课次，支援阿拉伯数字与中文数字（一、十一、二十…）。

use crate::error::LessonParseError;
use phf::phf_map;
use regex::Regex;
use std::sync::OnceLock;

/// 中文数字字元对照表（含〇、兩）
static CN_DIGIT: phf::Map<char, u32> = phf_map! {
    '零' => 0,
    '〇' => 0,
    '一' => 1,
    '二' => 2,
    '兩' => 2,
    '三' => 3,
    '四' => 4,
    '五' => 5,
    '六' => 6,
    '七' => 7,
    '八' => 8,
    '九' => 9,
};

const TEN: char = '十';

fn lesson_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"第([零〇一二兩三四五六七八九十0-9０-９]+)課").expect("lesson marker regex is valid")
    })
}

fn arabic_digits() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9０-９]+").expect("digit regex is valid"))
}

/// 半形或全形阿拉伯数字的值
fn arabic_digit_value(ch: char) -> Option<u32> {
    match ch {
        '0'..='9' => ch.to_digit(10),
        '０'..='９' => Some(ch as u32 - '０' as u32),
        _ => None,
    }
}

/// 从档名抓出第几课
///
/// 例如 `第十一課_漢字詞語表.xlsx` → 11，`N4_第二十課_漢字詞語表.xslx` → 20
pub fn extract_lesson_from_name(name: &str) -> Result<u32, LessonParseError> {
    let caps = lesson_marker()
        .captures(name)
        .ok_or_else(|| LessonParseError::NoLessonMarker {
            name: name.to_string(),
        })?;
    chinese_numeral_to_int(&caps[1])
}

/// 中文数字转整数
///
/// 解析顺序：
/// 1. 含阿拉伯数字（半形或全形）时直接取第一段数字
/// 2. 含「十」时拆成十位与个位（「十」= 10，「二十」= 20，「二十一」= 21）
/// 3. 单一数字字元直接对照
/// 4. 其余写法逐字累加：每个字元视为一个十进位位数
pub fn chinese_numeral_to_int(s: &str) -> Result<u32, LessonParseError> {
    let s = s.trim();
    let overflow = || LessonParseError::Overflow {
        numeral: s.to_string(),
    };

    if let Some(m) = arabic_digits().find(s) {
        return m
            .as_str()
            .chars()
            .filter_map(arabic_digit_value)
            .try_fold(0u32, |total, d| {
                total.checked_mul(10).and_then(|t| t.checked_add(d))
            })
            .ok_or_else(overflow);
    }

    if let Some((left, right)) = s.split_once(TEN) {
        let tens = single_digit(left).unwrap_or(1);
        let ones = single_digit(right).unwrap_or(0);
        return Ok(tens * 10 + ones);
    }

    if let Some(value) = single_digit(s) {
        return Ok(value);
    }

    // NOTE: 这里的写法只对「一二」这类逐位书写有意义，「三十五」在上面的分支已处理
    s.chars()
        .filter_map(|ch| CN_DIGIT.get(&ch).copied())
        .try_fold(0u32, |total, d| {
            total.checked_mul(10).and_then(|t| t.checked_add(d))
        })
        .ok_or_else(overflow)
}

/// 只有恰好一个已知字元时才对照成数字
fn single_digit(s: &str) -> Option<u32> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => CN_DIGIT.get(&ch).copied(),
        _ => None,
    }
}
