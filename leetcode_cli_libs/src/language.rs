use core::fmt;

/// 言語ごとのコメントの描画方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `/* ... */` ブロックコメント(C系言語)
    Block,
    /// 行ごとにプレフィックスを付ける(スクリプト系言語)
    Line,
}

/// 提出先として選択できる言語の集合
///
/// 拡張子・コメント記法・プリアンブルの要否をデータとして持つ。
/// 言語を増やすときはここに追加する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Golang,
    Python3,
    Java,
    Cpp,
    C,
    JavaScript,
    TypeScript,
    Rust,
}

/// 未知の言語タグはこの言語に解決される
pub const DEFAULT_LANGUAGE: Language = Language::Golang;

impl Language {
    pub const ALL: [Language; 8] = [
        Language::Golang,
        Language::Python3,
        Language::Java,
        Language::Cpp,
        Language::C,
        Language::JavaScript,
        Language::TypeScript,
        Language::Rust,
    ];

    /// 判題サーバが言語を識別するためのスラッグ
    pub fn slug(&self) -> &'static str {
        match self {
            Language::Golang => "golang",
            Language::Python3 => "python3",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::C => "c",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Rust => "rust",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Language::Golang => "go",
            Language::Python3 => "py",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::C => "c",
            Language::JavaScript => "js",
            Language::TypeScript => "ts",
            Language::Rust => "rs",
        }
    }

    pub fn comment_prefix(&self) -> &'static str {
        match self {
            Language::Python3 => "#",
            _ => "//",
        }
    }

    pub fn comment_style(&self) -> CommentStyle {
        match self.comment_prefix() {
            "//" => CommentStyle::Block,
            _ => CommentStyle::Line,
        }
    }

    /// ファイル先頭に置く宣言。構造上必要な言語だけが持つ。
    pub fn preamble(&self) -> Option<&'static str> {
        match self {
            Language::Golang => Some("package main"),
            _ => None,
        }
    }

    pub fn from_slug(slug: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|lang| lang.slug() == slug)
    }

    pub fn from_extension(extension: &str) -> Option<Language> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.extension() == extension)
    }

    /// 言語タグを解決する。未知のタグはデフォルト言語へフォールバックする。
    ///
    /// コメント記法が変わるだけでコード本体には影響しないため、
    /// 未知のタグで生成を失敗させることはしない。
    pub fn resolve(slug: &str) -> Language {
        Language::from_slug(slug).unwrap_or(DEFAULT_LANGUAGE)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_resolve_known_slug() {
        assert_eq!(Language::resolve("python3"), Language::Python3);
        assert_eq!(Language::resolve("rust"), Language::Rust);
    }

    #[test]
    fn test_resolve_unknown_slug_falls_back() {
        assert_eq!(Language::resolve("brainfuck"), DEFAULT_LANGUAGE);
        assert_eq!(Language::resolve(""), DEFAULT_LANGUAGE);
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(Language::from_extension("py"), Some(Language::Python3));
        assert_eq!(Language::from_extension("go"), Some(Language::Golang));
        assert_eq!(Language::from_extension("exe"), None);
    }

    #[test]
    fn test_comment_style_partition() {
        for lang in Language::ALL {
            match lang {
                Language::Python3 => assert_eq!(lang.comment_style(), CommentStyle::Line),
                _ => assert_eq!(lang.comment_style(), CommentStyle::Block),
            }
        }
    }

    #[test]
    fn test_preamble_only_for_golang() {
        assert_eq!(Language::Golang.preamble(), Some("package main"));
        for lang in Language::ALL.into_iter().filter(|l| *l != Language::Golang) {
            assert_eq!(lang.preamble(), None);
        }
    }
}
