use once_cell::sync::Lazy;
use regex::Regex;

static BLOCK_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</p>|</div>|</li>|<br\s*/?>").unwrap());
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// HTML の問題文をコメントへ埋め込める素のテキストに変換する
///
/// 段落が分かる程度の粗い変換で足りる。整形済みの描画は扱わない。
pub fn html_to_text(html: &str) -> String {
    let text = BLOCK_BOUNDARY.replace_all(html, "\n");
    let text = TAG.replace_all(&text, "");
    let text = unescape_entities(&text);
    let text = EXCESS_NEWLINES.replace_all(&text, "\n\n");

    text.trim().to_string()
}

// &amp; は最後に戻す。先に戻すと &amp;lt; が二重に解決されてしまう。
const ENTITIES: [(&str, &str); 8] = [
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&le;", "<="),
    ("&ge;", ">="),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&amp;", "&"),
];

fn unescape_entities(text: &str) -> String {
    ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (entity, plain)| {
            acc.replace(entity, plain)
        })
}
