//! Formatting helpers: pure text transforms used by the preview renderer

use url::Url;

/// 日期区间分隔符（en dash）
pub const DATE_SEPARATOR: &str = " – ";
/// 元信息行分隔符
pub const META_SEPARATOR: &str = " • ";
/// 结束日期为空时的显示
pub const PRESENT: &str = "Present";

const SKILL_MARKERS: [char; 2] = ['-', '•'];
const BULLET_MARKERS: [char; 3] = ['•', '-', '–'];

/// 解析技能输入：按换行或逗号切分，去掉开头的项目符号，丢弃空项
///
/// 保留首次出现的顺序，不去重。
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(['\n', ','])
        .map(|piece| {
            piece
                .trim_start_matches(|c: char| c.is_whitespace() || SKILL_MARKERS.contains(&c))
                .trim()
        })
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// 将详情文本拆成要点列表：每行最多去掉一个前导符号
pub fn format_bullets(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| {
            let line = line.trim();
            let line = match line.chars().next() {
                Some(c) if BULLET_MARKERS.contains(&c) => &line[c.len_utf8()..],
                _ => line,
            };
            line.trim()
        })
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// 格式化起止日期；结束为空时显示 "Present"
///
/// 开始为空而结束非空时保留分隔符：`("", "2023")` → `" – 2023"`。
pub fn format_dates(start: &str, end: &str) -> String {
    if start.is_empty() && end.is_empty() {
        return String::new();
    }
    let end = if end.is_empty() { PRESENT } else { end };
    format!("{start}{DATE_SEPARATOR}{end}")
}

/// 缩写链接：主机名（去掉 www.）加路径（去掉末尾斜杠）
///
/// 无法解析为绝对URL时原样返回。
pub fn format_link(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => {
            let host = parsed.host_str().unwrap_or("");
            let host = host.strip_prefix("www.").unwrap_or(host);
            let path = parsed.path();
            let path = path.strip_suffix('/').unwrap_or(path);
            format!("{host}{path}")
        }
        Err(e) => {
            tracing::debug!("链接无法解析，按原样显示: {} ({})", url, e);
            url.to_string()
        }
    }
}

/// 用 " • " 连接非空部分
pub fn build_meta_line<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .filter(|part| !part.as_ref().is_empty())
        .map(|part| part.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(META_SEPARATOR)
}
