pub mod config;
pub mod daily;
pub mod gen;
pub mod init;
pub mod list;
pub mod run;
pub mod submit;

use std::{env, ffi::OsString, path::PathBuf};

/// 解答ファイルの生成先ディレクトリを決定する
///
/// 優先順: --save-dir フラグ > QUESTIONS_SAVE_DIRECTORY 環境変数 >
/// カレントディレクトリ配下の questions/
pub(crate) fn resolve_save_dir(save_dir: Option<OsString>) -> PathBuf {
    match save_dir {
        Some(dir) => PathBuf::from(dir),
        None => match env::var("QUESTIONS_SAVE_DIRECTORY") {
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from("questions"),
        },
    }
}
