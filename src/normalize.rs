//! 地址清洗

/// 内置的标签关键字，按此顺序逐个替换
const LABEL_KEYWORDS: [&str; 17] = [
    "详细地址",
    "收货地址",
    "收件地址",
    "地址",
    "所在地区",
    "地区",
    "姓名",
    "收货人",
    "收件人",
    "联系人",
    "收",
    "邮编",
    "联系电话",
    "电话",
    "联系人手机号码",
    "手机号码",
    "手机号",
];

/// 需要清除的半角和全角标点
const PUNCTUATION: &str =
    "`~!@#$^&*()=|{}':;,[].<>/?！￥…（）—【】‘；：”“’。，、？";

/// 清洗地址
///
/// 依次：换行和制表符替换为空格；内置关键字及调用方附加关键字
/// 整体替换为空格；标点替换为空格；连续空格折叠为一个。
/// 对自身输出再次清洗是恒等操作。
pub(crate) fn clean(address: &str, text_filter: &[String]) -> String {
    let mut cleaned = address
        .replace("\r\n", " ")
        .replace('\n', " ")
        .replace('\t', " ");

    for keyword in LABEL_KEYWORDS {
        cleaned = cleaned.replace(keyword, " ");
    }
    for keyword in text_filter {
        if !keyword.is_empty() {
            cleaned = cleaned.replace(keyword.as_str(), " ");
        }
    }

    let cleaned: String = cleaned
        .chars()
        .map(|ch| if PUNCTUATION.contains(ch) { ' ' } else { ch })
        .collect();

    collapse_spaces(&cleaned)
}

/// 两个以上的连续空格折叠为一个
fn collapse_spaces(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut last_was_space = false;
    for ch in text.chars() {
        if ch == ' ' {
            if !last_was_space {
                collapsed.push(ch);
            }
            last_was_space = true;
        } else {
            collapsed.push(ch);
            last_was_space = false;
        }
    }
    collapsed
}
