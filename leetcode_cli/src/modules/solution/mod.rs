pub mod generator;
pub mod metadata;
pub mod reader;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolutionError {
    /// ファイルにセンチネルが見つからない。壊れたファイルの合図。
    #[error("code markers (@lc code=start/end) not found")]
    MarkersNotFound,
    /// センチネルはあるが中身が空。未着手のファイルと区別できる。
    #[error("code block between markers is empty")]
    EmptyCodeBlock,
    #[error("slug metadata not found")]
    SlugNotFound,
    #[error("language metadata not found")]
    LanguageNotFound,
    #[error("file already exists: {0}")]
    AlreadyExists(PathBuf),
    #[error("no code template for language [{language}] in problem [{slug}]")]
    MissingTemplate { slug: String, language: String },
    #[error("couldn't determine slug from filename: {0} (expected {{id}}_{{slug}}.{{ext}})")]
    UnrecognizedFilename(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
