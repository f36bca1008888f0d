use super::SolutionError;
use itertools::Itertools;
use leetcode_cli_libs::language::{CommentStyle, Language};
use leetcode_cli_libs::leetcode::client::Site;
use leetcode_cli_libs::leetcode::model::ProblemDetail;
use once_cell::sync::Lazy;
use regex::Regex;

/// 埋め込みコード領域のセンチネル。各言語のコメントとして描画される。
pub const CODE_START: &str = "@lc code=start";
pub const CODE_END: &str = "@lc code=end";

// 前後の文面が手で書き換えられてもフィールドだけ残っていれば拾えるよう、
// 行内の位置や空白には依存しない。
static SLUG_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@lc\b[^\n]*?\bslug=([A-Za-z0-9_-]+)").unwrap());
static LANG_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@lc\b[^\n]*?\blang=([A-Za-z0-9]+)").unwrap());

/// 出自メタデータと問題文をまとめたヘッダコメントを組み立てる
pub fn encode_header(
    detail: &ProblemDetail,
    site: Site,
    language: Language,
    description: &str,
) -> String {
    let provenance = format!(
        "@lc app=leetcode.{} id={} lang={} slug={}",
        site,
        detail.question_frontend_id,
        language.slug(),
        detail.title_slug,
    );
    let headline = format!(
        "[{}] {} ({})",
        detail.question_frontend_id, detail.title, detail.difficulty,
    );
    let body = format!("{}\n\n{}\n\n{}", provenance, headline, description);

    render_comment(&body, language)
}

/// テキストを言語のコメント記法で描画する
pub fn render_comment(text: &str, language: Language) -> String {
    match language.comment_style() {
        CommentStyle::Block => {
            let lines = text
                .lines()
                .map(|line| {
                    if line.is_empty() {
                        String::from(" *")
                    } else {
                        format!(" * {}", line)
                    }
                })
                .join("\n");
            format!("/*\n{}\n */", lines)
        }
        CommentStyle::Line => {
            let prefix = language.comment_prefix();
            text.lines()
                .map(|line| {
                    if line.is_empty() {
                        String::from(prefix)
                    } else {
                        format!("{} {}", prefix, line)
                    }
                })
                .join("\n")
        }
    }
}

/// コードをセンチネル行で挟む
pub fn wrap_code(code: &str, language: Language) -> String {
    let prefix = language.comment_prefix();
    format!(
        "{} {}\n{}\n{} {}",
        prefix, CODE_START, code, prefix, CODE_END,
    )
}

/// センチネルの間からコードを取り出す
///
/// 開始センチネルは最初の出現、終了センチネルは最後の出現を使う。
/// ユーザのコードやコメントにセンチネルと同じ文字列が紛れても
/// 境界を誤らないための規則。終了センチネルはコメントプレフィックス
/// ごと行頭から除外する。
pub fn unwrap_code(text: &str) -> Result<String, SolutionError> {
    let start = text.find(CODE_START).ok_or(SolutionError::MarkersNotFound)?;
    let end = text.rfind(CODE_END).ok_or(SolutionError::MarkersNotFound)?;

    let start_line_end = text[start..]
        .find('\n')
        .ok_or(SolutionError::EmptyCodeBlock)?;
    let code_start = start + start_line_end + 1;

    let code_end = match text[..end].rfind('\n') {
        Some(position) => position,
        None => return Err(SolutionError::EmptyCodeBlock),
    };

    if code_start >= code_end {
        return Err(SolutionError::EmptyCodeBlock);
    }

    let code = text[code_start..code_end].trim();
    if code.is_empty() {
        return Err(SolutionError::EmptyCodeBlock);
    }

    Ok(String::from(code))
}

pub fn decode_slug(text: &str) -> Result<String, SolutionError> {
    SLUG_FIELD
        .captures(text)
        .map(|captures| String::from(&captures[1]))
        .ok_or(SolutionError::SlugNotFound)
}

/// 言語フィールドの生のスラッグを返す。解決は呼び出し側で行う。
pub fn decode_language(text: &str) -> Result<String, SolutionError> {
    LANG_FIELD
        .captures(text)
        .map(|captures| String::from(&captures[1]))
        .ok_or(SolutionError::LanguageNotFound)
}
