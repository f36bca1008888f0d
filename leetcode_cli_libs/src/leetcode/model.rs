use crate::language::Language;
use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(alias = "EASY", alias = "easy")]
    Easy,
    #[serde(alias = "MEDIUM", alias = "medium")]
    Medium,
    #[serde(alias = "HARD", alias = "hard")]
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// ユーザから見た問題の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    Unsolved,
    Solved,
    Attempted,
    Unknown,
}

impl SolveStatus {
    /// サイトやエンドポイントごとに表記が揺れるステータス文字列を正規化する
    pub fn from_raw(raw: Option<&str>) -> SolveStatus {
        let Some(raw) = raw else {
            return SolveStatus::Unsolved;
        };
        match raw.to_ascii_uppercase().as_str() {
            "AC" | "SOLVED" => SolveStatus::Solved,
            "NOTAC" | "TRIED" | "ATTEMPTED" => SolveStatus::Attempted,
            "" | "TO_DO" | "TODO" | "NOT_STARTED" => SolveStatus::Unsolved,
            _ => SolveStatus::Unknown,
        }
    }
}

/// 一覧・検索結果に現れる問題の概要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub question_frontend_id: String,
    pub title: String,
    #[serde(default)]
    pub translated_title: Option<String>,
    pub title_slug: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "isPaidOnly")]
    pub paid_only: bool,
}

impl Problem {
    pub fn solve_status(&self) -> SolveStatus {
        SolveStatus::from_raw(self.status.as_deref())
    }

    /// 翻訳タイトルがあれば「訳題 (原題)」の形式で返す
    pub fn display_title(&self) -> String {
        match &self.translated_title {
            Some(translated) if !translated.is_empty() => {
                format!("{} ({})", translated, self.title)
            }
            _ => self.title.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSnippet {
    pub lang: String,
    pub lang_slug: String,
    pub code: String,
}

/// 単一問題の詳細。提出に必要な情報をすべて持つ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetail {
    /// 判題サーバが要求する内部 ID。フロントエンド ID と混同しないこと。
    pub question_id: String,
    pub question_frontend_id: String,
    pub title: String,
    #[serde(default)]
    pub translated_title: Option<String>,
    pub title_slug: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub translated_content: Option<String>,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub sample_test_case: String,
    #[serde(default)]
    pub code_snippets: Vec<CodeSnippet>,
}

impl ProblemDetail {
    pub fn template_for(&self, language: Language) -> Option<&str> {
        self.code_snippets
            .iter()
            .find(|snippet| snippet.lang_slug == language.slug())
            .map(|snippet| snippet.code.as_str())
    }

    /// 翻訳版があればそちらを優先する
    pub fn best_content(&self) -> &str {
        match &self.translated_content {
            Some(content) if !content.is_empty() => content,
            _ => self.content.as_deref().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QuestionListResponse {
    #[serde(default)]
    pub data: Option<QuestionListData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionListData {
    #[serde(default)]
    pub problemset_question_list: Option<QuestionList>,
    #[serde(default)]
    pub problemset_question_list_v2: Option<QuestionList>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuestionList {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub questions: Vec<Problem>,
}

impl QuestionListResponse {
    /// V2 のレスポンスを優先し、旧形式にフォールバックする
    pub fn into_questions(self) -> Vec<Problem> {
        let Some(data) = self.data else {
            return Vec::new();
        };
        match data.problemset_question_list_v2 {
            Some(list) if !list.questions.is_empty() => list.questions,
            _ => data
                .problemset_question_list
                .map(|list| list.questions)
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QuestionDetailResponse {
    #[serde(default)]
    pub data: Option<QuestionDetailData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuestionDetailData {
    #[serde(default)]
    pub question: Option<ProblemDetail>,
}

#[derive(Debug, Deserialize)]
pub struct DailyChallengeResponse {
    #[serde(default)]
    pub data: Option<DailyChallengeData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyChallengeData {
    #[serde(default)]
    pub active_daily_coding_challenge_question: Option<DailyChallenge>,
    #[serde(default)]
    pub today_record: Vec<DailyChallenge>,
}

#[derive(Debug, Deserialize)]
pub struct DailyChallenge {
    #[serde(default)]
    pub date: String,
    pub question: Problem,
}

impl DailyChallengeResponse {
    pub fn into_daily(self) -> Option<DailyChallenge> {
        let data = self.data?;
        data.active_daily_coding_challenge_question
            .or_else(|| data.today_record.into_iter().next())
    }
}

#[derive(Debug, Deserialize)]
pub struct UserStatusResponse {
    #[serde(default)]
    pub data: Option<UserStatusData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatusData {
    #[serde(default)]
    pub user_status: Option<UserStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatus {
    #[serde(default)]
    pub is_signed_in: bool,
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct InterpretResponse {
    #[serde(default)]
    pub interpret_id: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub submission_id: i64,
}

/// ドライラン(interpret_solution)の状態確認レスポンス
///
/// 判題中は `state` 以外のフィールドがほぼ空で返るため、全フィールドに
/// デフォルトを持たせている。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunCheckResponse {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub status_msg: String,
    #[serde(default)]
    pub compile_error: Option<String>,
    #[serde(default)]
    pub full_compile_error: Option<String>,
    #[serde(default)]
    pub runtime_error: Option<String>,
    #[serde(default)]
    pub full_runtime_error: Option<String>,
    #[serde(default)]
    pub correct_answer: bool,
    #[serde(default)]
    pub code_answer: Vec<String>,
    #[serde(default, rename = "expected_code_answer")]
    pub expected_answer: Vec<String>,
    #[serde(default)]
    pub input_formatted: Vec<String>,
    #[serde(default, rename = "std_output_list")]
    pub std_output: Vec<String>,
    #[serde(default)]
    pub elapsed_time: Option<u32>,
    #[serde(default)]
    pub total_correct: Option<u32>,
    #[serde(default)]
    pub total_testcases: Option<u32>,
}

/// 採点付き提出(submit)の状態確認レスポンス
///
/// ドライランとはフィールドの形が異なる(ケース情報が配列ではなく単一)。
/// この非対称はサーバ側の仕様であり、意図的に別の型として保持する。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitCheckResponse {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub status_msg: String,
    #[serde(default)]
    pub compile_error: Option<String>,
    #[serde(default)]
    pub full_compile_error: Option<String>,
    #[serde(default)]
    pub runtime_error: Option<String>,
    #[serde(default)]
    pub full_runtime_error: Option<String>,
    #[serde(default)]
    pub total_correct: Option<u32>,
    #[serde(default)]
    pub total_testcases: Option<u32>,
    #[serde(default)]
    pub status_runtime: Option<String>,
    #[serde(default)]
    pub runtime_percentile: Option<f64>,
    #[serde(default)]
    pub status_memory: Option<String>,
    #[serde(default)]
    pub memory_percentile: Option<f64>,
    #[serde(default)]
    pub input_formatted: Option<String>,
    #[serde(default)]
    pub code_output: Option<String>,
    #[serde(default)]
    pub expected_output: Option<String>,
    #[serde(default)]
    pub std_output: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_question_list_prefers_v2() {
        let body = r#"{
            "data": {
                "problemsetQuestionList": {
                    "total": 1,
                    "questions": [{
                        "questionFrontendId": "9",
                        "title": "Old",
                        "titleSlug": "old",
                        "difficulty": "Easy"
                    }]
                },
                "problemsetQuestionListV2": {
                    "questions": [{
                        "questionFrontendId": "1",
                        "title": "Two Sum",
                        "translatedTitle": "两数之和",
                        "titleSlug": "two-sum",
                        "difficulty": "EASY",
                        "status": "TO_DO",
                        "paidOnly": false
                    }]
                }
            }
        }"#;
        let response: QuestionListResponse = serde_json::from_str(body).unwrap();
        let questions = response.into_questions();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].title_slug, "two-sum");
        assert_eq!(questions[0].difficulty, Difficulty::Easy);
        assert_eq!(questions[0].solve_status(), SolveStatus::Unsolved);
    }

    #[test]
    fn test_question_list_falls_back_to_v1() {
        let body = r#"{
            "data": {
                "problemsetQuestionList": {
                    "total": 1,
                    "questions": [{
                        "questionFrontendId": "2",
                        "title": "Add Two Numbers",
                        "titleSlug": "add-two-numbers",
                        "difficulty": "Medium",
                        "status": "ac",
                        "isPaidOnly": false
                    }]
                }
            }
        }"#;
        let response: QuestionListResponse = serde_json::from_str(body).unwrap();
        let questions = response.into_questions();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question_frontend_id, "2");
        assert_eq!(questions[0].solve_status(), SolveStatus::Solved);
    }

    #[test]
    fn test_problem_detail_template_lookup() {
        let body = r#"{
            "data": {
                "question": {
                    "questionId": "1",
                    "questionFrontendId": "1",
                    "title": "Two Sum",
                    "titleSlug": "two-sum",
                    "content": "<p>Given an array...</p>",
                    "translatedContent": null,
                    "difficulty": "Easy",
                    "sampleTestCase": "[2,7,11,15]\n9",
                    "codeSnippets": [
                        {"lang": "Go", "langSlug": "golang", "code": "func twoSum() {}"},
                        {"lang": "Python3", "langSlug": "python3", "code": "class Solution: ..."}
                    ]
                }
            }
        }"#;
        let response: QuestionDetailResponse = serde_json::from_str(body).unwrap();
        let detail = response.data.unwrap().question.unwrap();
        assert_eq!(
            detail.template_for(Language::Golang),
            Some("func twoSum() {}")
        );
        assert_eq!(detail.template_for(Language::Rust), None);
        assert_eq!(detail.best_content(), "<p>Given an array...</p>");
    }

    #[test]
    fn test_run_check_tolerates_pending_payload() {
        let body = r#"{"state": "PENDING"}"#;
        let response: RunCheckResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.state, "PENDING");
        assert_eq!(response.total_correct, None);
        assert!(response.code_answer.is_empty());
    }

    #[test]
    fn test_run_check_tolerates_nulls() {
        let body = r#"{
            "state": "SUCCESS",
            "status_msg": "Finished",
            "compile_error": null,
            "correct_answer": true,
            "total_correct": 3,
            "total_testcases": 3
        }"#;
        let response: RunCheckResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.compile_error, None);
        assert!(response.correct_answer);
        assert_eq!(response.total_correct, Some(3));
    }

    #[test]
    fn test_solve_status_normalization() {
        assert_eq!(SolveStatus::from_raw(None), SolveStatus::Unsolved);
        assert_eq!(SolveStatus::from_raw(Some("ac")), SolveStatus::Solved);
        assert_eq!(SolveStatus::from_raw(Some("SOLVED")), SolveStatus::Solved);
        assert_eq!(
            SolveStatus::from_raw(Some("notac")),
            SolveStatus::Attempted
        );
        assert_eq!(SolveStatus::from_raw(Some("TO_DO")), SolveStatus::Unsolved);
        assert_eq!(
            SolveStatus::from_raw(Some("whatever")),
            SolveStatus::Unknown
        );
    }

    #[test]
    fn test_daily_challenge_cn_shape() {
        let body = r#"{
            "data": {
                "todayRecord": [{
                    "date": "2024-05-01",
                    "question": {
                        "questionFrontendId": "42",
                        "title": "Trapping Rain Water",
                        "titleSlug": "trapping-rain-water",
                        "difficulty": "HARD"
                    }
                }]
            }
        }"#;
        let response: DailyChallengeResponse = serde_json::from_str(body).unwrap();
        let daily = response.into_daily().unwrap();
        assert_eq!(daily.date, "2024-05-01");
        assert_eq!(daily.question.title_slug, "trapping-rain-water");
    }
}
