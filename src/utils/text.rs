//! 文本规范化工具

/// 统一换行：`\r\n`、单独的 `\r`、U+2028/U+2029/U+0085 均转为 `\n`，并去掉 BOM
pub fn normalize_content(raw: &str) -> String {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            }
            '\u{2028}' | '\u{2029}' | '\u{0085}' => out.push('\n'),
            _ => out.push(c),
        }
    }

    out
}

/// 单行规范化：残留的行分隔符替换为空格，去掉 `\r`，两端去空白
pub fn normalize_line(line: &str) -> String {
    line.replace(['\u{2028}', '\u{2029}'], " ")
        .replace('\r', "")
        .trim()
        .to_string()
}

/// 去掉两端的强调符号（`**`、`__`）
pub fn strip_emphasis(text: &str) -> &str {
    text.trim()
        .trim_start_matches(['*', '_'])
        .trim_end_matches(['*', '_'])
        .trim()
}

/// 用单个空格拼接非空片段
pub fn join_fragments<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .filter_map(|p| {
            let p = p.as_ref().trim();
            (!p.is_empty()).then(|| p.to_string())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// 标签大写（ç → Ç，ı/i → I）
pub fn normalize_label(c: char) -> char {
    match c {
        'ı' | 'i' => 'I',
        _ => c.to_uppercase().next().unwrap_or(c),
    }
}
