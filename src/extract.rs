//! 电话和邮编提取
//!
//! 两个提取器都在分片之前对整条地址执行一次，只取第一个命中，
//! 命中的文本从地址中挖除并替换为一个空格。

use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_GROUPING: Lazy<[(Regex, &str); 4]> = Lazy::new(|| {
    [
        (Regex::new(r"(\d{3})-(\d{4})-(\d{4})").unwrap(), "${1}${2}${3}"),
        (Regex::new(r"(\d{3}) (\d{4}) (\d{4})").unwrap(), "${1}${2}${3}"),
        (Regex::new(r"(\d{4})-(\d{4})-(\d{4})").unwrap(), "${1}${2}${3}"),
        (Regex::new(r"(\d{4}) (\d{4}) (\d{4})").unwrap(), "${1}${2}${3}"),
    ]
});

static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{7,12}|\d{3,4}-\d{6,8}|86-1[0-9]{10}|861[0-9]{10}|1[0-9]{10}").unwrap()
});

static POSTAL_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{6}").unwrap());

/// 提取电话号码，返回（挖除后的地址，电话）
///
/// 先把 3-4-4 / 4-4-4 的连字符或空格分组合并成连续数字，
/// 再从左到右取第一个符合电话形态的数字串。
pub(crate) fn extract_phone(address: &str) -> (String, String) {
    let mut address = address.to_string();
    for (pattern, replacement) in PHONE_GROUPING.iter() {
        address = pattern.replace_all(&address, *replacement).into_owned();
    }

    match PHONE.find(&address) {
        Some(found) => {
            let phone = found.as_str().to_string();
            let address = splice_out(&address, found.start(), found.end());
            (address, phone)
        }
        None => (address, String::new()),
    }
}

/// 提取邮政编码，返回（挖除后的地址，邮编）
pub(crate) fn extract_postal_code(address: &str) -> (String, String) {
    match POSTAL_CODE.find(address) {
        Some(found) => {
            let postal_code = found.as_str().to_string();
            let address = splice_out(address, found.start(), found.end());
            (address, postal_code)
        }
        None => (address.to_string(), String::new()),
    }
}

/// 把 `[start, end)` 区间替换为一个空格
fn splice_out(text: &str, start: usize, end: usize) -> String {
    let mut spliced = String::with_capacity(text.len());
    spliced.push_str(&text[..start]);
    spliced.push(' ');
    spliced.push_str(&text[end..]);
    spliced
}
