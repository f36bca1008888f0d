use super::{metadata, SolutionError};
use leetcode_cli_libs::language::{Language, DEFAULT_LANGUAGE};
use std::path::Path;
use tokio::fs;

/// 編集後のファイルからコード本体を取り出す
pub async fn read_code(path: impl AsRef<Path>) -> Result<String, SolutionError> {
    let text = fs::read_to_string(path.as_ref()).await?;
    metadata::unwrap_code(&text)
}

/// 問題スラッグの解決
///
/// メタデータ → ファイル名 ({id}_{slug}.{ext}) の順で試す。
/// ファイル名へのフォールバックはメタデータ導入前に生成された
/// ファイルや手書きのファイルのためにある。
pub async fn read_slug(path: impl AsRef<Path>) -> Result<String, SolutionError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).await?;

    match metadata::decode_slug(&text) {
        Ok(slug) => Ok(slug),
        Err(_) => slug_from_filename(path)
            .ok_or_else(|| SolutionError::UnrecognizedFilename(path.to_path_buf())),
    }
}

/// 言語の解決。メタデータ → 拡張子 → デフォルト言語の順で試す。
pub async fn read_language(path: impl AsRef<Path>) -> Result<Language, SolutionError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).await?;

    if let Ok(slug) = metadata::decode_language(&text) {
        return Ok(Language::resolve(&slug));
    }

    let by_extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .and_then(Language::from_extension);

    Ok(by_extension.unwrap_or(DEFAULT_LANGUAGE))
}

fn slug_from_filename(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let (_, slug) = stem.split_once('_')?;
    if slug.is_empty() {
        return None;
    }

    Some(String::from(slug))
}

#[cfg(test)]
mod test {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("leetcode_cli_reader_{}_{}", name, std::process::id()))
    }

    async fn write_fixture(dir: &Path, name: &str, body: &str) -> PathBuf {
        fs::create_dir_all(dir).await.unwrap();
        let path = dir.join(name);
        fs::write(&path, body).await.unwrap();
        path
    }

    #[tokio::test]
    async fn test_read_code_and_metadata() {
        let dir = scratch_dir("metadata");
        let _ = fs::remove_dir_all(&dir).await;

        let body = "/*\n * @lc app=leetcode.cn id=1 lang=golang slug=two-sum\n */\n\n// @lc code=start\nfunc twoSum() {}\n// @lc code=end\n";
        let path = write_fixture(&dir, "0001_two-sum.go", body).await;

        assert_eq!(read_code(&path).await.unwrap(), "func twoSum() {}");
        assert_eq!(read_slug(&path).await.unwrap(), "two-sum");
        assert_eq!(read_language(&path).await.unwrap(), Language::Golang);

        let _ = fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn test_slug_falls_back_to_filename() {
        let dir = scratch_dir("filename");
        let _ = fs::remove_dir_all(&dir).await;

        // メタデータのない手書きファイル
        let body = "// @lc code=start\nint main() {}\n// @lc code=end\n";
        let path = write_fixture(&dir, "0042_foo-bar.ext", body).await;

        assert_eq!(read_slug(&path).await.unwrap(), "foo-bar");
        // 未知の拡張子はデフォルト言語になる
        assert_eq!(read_language(&path).await.unwrap(), DEFAULT_LANGUAGE);

        let _ = fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn test_language_falls_back_to_extension() {
        let dir = scratch_dir("extension");
        let _ = fs::remove_dir_all(&dir).await;

        let body = "# @lc code=start\nprint(1)\n# @lc code=end\n";
        let path = write_fixture(&dir, "0217_contains-duplicate.py", body).await;

        assert_eq!(read_language(&path).await.unwrap(), Language::Python3);

        let _ = fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn test_unparsable_filename_without_metadata() {
        let dir = scratch_dir("unparsable");
        let _ = fs::remove_dir_all(&dir).await;

        let body = "// @lc code=start\nint main() {}\n// @lc code=end\n";
        let path = write_fixture(&dir, "scratch.c", body).await;

        let result = read_slug(&path).await;
        assert!(matches!(
            result,
            Err(SolutionError::UnrecognizedFilename(_))
        ));

        let _ = fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let result = read_code("no/such/file.go").await;
        assert!(matches!(result, Err(SolutionError::Io(_))));
    }

    #[test]
    fn test_slug_from_filename_shapes() {
        assert_eq!(
            slug_from_filename(Path::new("0001_two-sum.go")).as_deref(),
            Some("two-sum")
        );
        // スラッグ側のアンダースコアは最初の区切りだけで分割される
        assert_eq!(
            slug_from_filename(Path::new("0100_same_tree.go")).as_deref(),
            Some("same_tree")
        );
        assert_eq!(slug_from_filename(Path::new("scratch.go")), None);
        assert_eq!(slug_from_filename(Path::new("0001_.go")), None);
    }
}
