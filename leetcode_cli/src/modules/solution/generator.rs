use super::{metadata, SolutionError};
use crate::modules::html;
use leetcode_cli_libs::language::Language;
use leetcode_cli_libs::leetcode::client::Site;
use leetcode_cli_libs::leetcode::model::ProblemDetail;
use std::path::PathBuf;
use tokio::fs;

/// 問題詳細から解答ファイルを一つ生成する
pub struct SolutionGenerator<'a> {
    detail: &'a ProblemDetail,
    save_dir: PathBuf,
    site: Site,
    language: Language,
}

impl<'a> SolutionGenerator<'a> {
    pub fn new(
        detail: &'a ProblemDetail,
        save_dir: impl Into<PathBuf>,
        site: Site,
        language: Language,
    ) -> Self {
        SolutionGenerator {
            detail,
            save_dir: save_dir.into(),
            site,
            language,
        }
    }

    /// 生成するファイル名
    ///
    /// 数値のフロントエンド ID はゼロ埋めして辞書順と問題順を一致させる。
    /// 数値でない ID(面接問題集など)はそのまま使う。
    pub fn file_name(&self) -> String {
        let id = &self.detail.question_frontend_id;
        let id = if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
            format!("{:0>4}", id)
        } else {
            id.clone()
        };

        format!(
            "{}_{}.{}",
            id,
            self.detail.title_slug,
            self.language.extension(),
        )
    }

    fn compose(&self, template: &str) -> String {
        let description = html::html_to_text(self.detail.best_content());
        let header = metadata::encode_header(self.detail, self.site, self.language, &description);
        let wrapped = metadata::wrap_code(template, self.language);

        let mut document = String::new();
        if let Some(preamble) = self.language.preamble() {
            document.push_str(preamble);
            document.push_str("\n\n");
        }
        document.push_str(&header);
        document.push_str("\n\n");
        document.push_str(&wrapped);
        document.push('\n');

        document
    }

    /// ファイルを書き出し、生成先のパスを返す
    ///
    /// 既存ファイルの上書きは拒否する。編集途中の解答を潰すのは
    /// データ損失であって利便性ではない。
    pub async fn generate(&self) -> Result<PathBuf, SolutionError> {
        let template =
            self.detail
                .template_for(self.language)
                .ok_or_else(|| SolutionError::MissingTemplate {
                    slug: self.detail.title_slug.clone(),
                    language: String::from(self.language.slug()),
                })?;

        let path = self.save_dir.join(self.file_name());
        if fs::try_exists(&path).await? {
            return Err(SolutionError::AlreadyExists(path));
        }

        fs::create_dir_all(&self.save_dir).await?;
        fs::write(&path, self.compose(template)).await?;
        tracing::info!("solution file was generated at {}", path.display());

        Ok(path)
    }
}
