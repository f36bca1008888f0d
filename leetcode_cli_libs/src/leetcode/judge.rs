use crate::language::Language;
use crate::leetcode::client::{LeetCodeClient, LeetCodeError};
use crate::leetcode::model::{
    InterpretResponse, ProblemDetail, RunCheckResponse, SubmitCheckResponse, SubmitResponse,
};
use async_trait::async_trait;
use serde::Serialize;
use tokio::time::{self, Duration};

type Result<T> = std::result::Result<T, LeetCodeError>;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);
pub const DEFAULT_MAX_ATTEMPTS: u32 = 20;

/// 判題が終わったことを示す state 値。これ以外はすべて継続。
const TERMINAL_STATE: &str = "SUCCESS";
const ACCEPTED_STATUS: &str = "Accepted";
const FINISHED_STATUS: &str = "Finished";
const WRONG_ANSWER_STATUS: &str = "Wrong Answer";

/// 一回の提出リクエスト。構築後は不変。
///
/// question_id は判題サーバ内部の ID であり、フロントエンド ID を
/// 入れてはならない。
#[derive(Debug, Clone, Serialize)]
pub struct JudgeRequest {
    pub lang: String,
    pub question_id: String,
    pub typed_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_input: Option<String>,
}

impl JudgeRequest {
    /// 採点付き提出のリクエスト
    pub fn graded(detail: &ProblemDetail, code: &str, language: Language) -> Self {
        JudgeRequest {
            lang: String::from(language.slug()),
            question_id: detail.question_id.clone(),
            typed_code: String::from(code),
            data_input: None,
        }
    }

    /// サンプル入力に対するドライランのリクエスト
    pub fn dry_run(detail: &ProblemDetail, code: &str, language: Language) -> Self {
        JudgeRequest {
            lang: String::from(language.slug()),
            question_id: detail.question_id.clone(),
            typed_code: String::from(code),
            data_input: Some(detail.sample_test_case.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunToken(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionToken(pub i64);

/// 判題サーバとの通信の継ぎ目
///
/// ポーリングのテストで偽の判題サーバに差し替えるための trait。
#[async_trait]
pub trait JudgeApi {
    async fn interpret(&self, slug: &str, request: &JudgeRequest) -> Result<RunToken>;
    async fn submit(&self, slug: &str, request: &JudgeRequest) -> Result<SubmissionToken>;
    async fn check_run(&self, token: &RunToken) -> Result<RunCheckResponse>;
    async fn check_submission(&self, token: &SubmissionToken) -> Result<SubmitCheckResponse>;
}

#[async_trait]
impl JudgeApi for LeetCodeClient {
    async fn interpret(&self, slug: &str, request: &JudgeRequest) -> Result<RunToken> {
        let path = format!("/problems/{}/interpret_solution/", slug);
        let response: InterpretResponse = self.post_json(&path, request).await?;
        if response.interpret_id.is_empty() {
            return Err(LeetCodeError::UnexpectedError(String::from(
                "judge did not return an interpret id",
            )));
        }

        Ok(RunToken(response.interpret_id))
    }

    async fn submit(&self, slug: &str, request: &JudgeRequest) -> Result<SubmissionToken> {
        let path = format!("/problems/{}/submit/", slug);
        let response: SubmitResponse = self.post_json(&path, request).await?;
        if response.submission_id == 0 {
            return Err(LeetCodeError::UnexpectedError(String::from(
                "judge did not return a submission id",
            )));
        }

        Ok(SubmissionToken(response.submission_id))
    }

    async fn check_run(&self, token: &RunToken) -> Result<RunCheckResponse> {
        let path = format!("/submissions/detail/{}/check/", token.0);
        self.get_json(&path, &[]).await
    }

    async fn check_submission(&self, token: &SubmissionToken) -> Result<SubmitCheckResponse> {
        let path = format!("/submissions/detail/{}/check/", token.0);
        self.get_json(&path, &[]).await
    }
}

/// 一つのテストケースの入出力
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseReport {
    pub input: String,
    pub output: String,
    pub expected: String,
    pub stdout: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AcceptedReport {
    pub total_correct: u32,
    pub total_testcases: u32,
    /// 採点付き提出のみ
    pub runtime: Option<String>,
    pub runtime_percentile: Option<f64>,
    pub memory: Option<String>,
    pub memory_percentile: Option<f64>,
    /// ドライランのみ
    pub elapsed_time_ms: Option<u32>,
    pub cases: Vec<CaseReport>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WrongAnswerReport {
    pub total_correct: u32,
    pub total_testcases: u32,
    pub cases: Vec<CaseReport>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnknownReport {
    pub status: String,
    pub total_correct: u32,
    pub total_testcases: u32,
    pub last_input: Option<String>,
}

/// 判題結果の分類
///
/// コンパイルエラーや不正解は例外ではなく値として返す。
/// TimedOut はクライアント側のポーリング打ち切りであり、
/// 判題サーバが報告する失敗とは区別される。
#[derive(Debug, Clone, PartialEq)]
pub enum JudgeOutcome {
    Accepted(AcceptedReport),
    WrongAnswer(WrongAnswerReport),
    CompileError(String),
    RuntimeError(String),
    TimedOut,
    Unknown(UnknownReport),
}

/// 提出からポーリング、結果分類までを担う
///
/// 同時に扱う提出は一つだけ。interval と max_attempts はテストから
/// 差し替えられるようフィールドに持つ。
pub struct JudgeSession<'a, C> {
    api: &'a C,
    interval: Duration,
    max_attempts: u32,
}

impl<'a, C: JudgeApi> JudgeSession<'a, C> {
    pub fn new(api: &'a C) -> Self {
        JudgeSession {
            api,
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_polling(mut self, interval: Duration, max_attempts: u32) -> Self {
        self.interval = interval;
        self.max_attempts = max_attempts;
        self
    }

    /// ドライランを提出し、終了までポーリングする
    pub async fn run(
        &self,
        detail: &ProblemDetail,
        code: &str,
        language: Language,
    ) -> Result<JudgeOutcome> {
        let request = JudgeRequest::dry_run(detail, code, language);
        let token = self.api.interpret(&detail.title_slug, &request).await?;
        tracing::info!("run task {} was accepted by the judge", token.0);

        for attempt in 1..=self.max_attempts {
            let response = self.api.check_run(&token).await?;
            if response.state == TERMINAL_STATE {
                return Ok(classify_run(&response, &detail.sample_test_case));
            }
            tracing::debug!(
                "attempt {}/{}: state is [{}], keep waiting",
                attempt,
                self.max_attempts,
                response.state
            );
            time::sleep(self.interval).await;
        }

        tracing::warn!("gave up waiting for the run result");
        Ok(JudgeOutcome::TimedOut)
    }

    /// 採点付き提出を行い、終了までポーリングする
    pub async fn submit(
        &self,
        detail: &ProblemDetail,
        code: &str,
        language: Language,
    ) -> Result<JudgeOutcome> {
        let request = JudgeRequest::graded(detail, code, language);
        let token = self.api.submit(&detail.title_slug, &request).await?;
        tracing::info!("submission {} was accepted by the judge", token.0);

        for attempt in 1..=self.max_attempts {
            let response = self.api.check_submission(&token).await?;
            if response.state == TERMINAL_STATE {
                return Ok(classify_submission(&response));
            }
            tracing::debug!(
                "attempt {}/{}: state is [{}], keep waiting",
                attempt,
                self.max_attempts,
                response.state
            );
            time::sleep(self.interval).await;
        }

        tracing::warn!("gave up waiting for the submission result");
        Ok(JudgeOutcome::TimedOut)
    }
}

/// ドライラン結果の分類
///
/// 成功には status が終了を示すことに加えて correct_answer フラグが
/// 必要になる。採点付き提出とは判定条件が異なるが、これはレスポンスの
/// 形の違いに由来するもので、揃えてはならない。
pub fn classify_run(response: &RunCheckResponse, sample_input: &str) -> JudgeOutcome {
    // コンパイルエラーは他のどのフィールドよりも優先される。
    // 古いケース情報と同居したペイロードが実在する。
    if let Some(diagnostic) =
        error_diagnostic(&response.full_compile_error, &response.compile_error)
    {
        return JudgeOutcome::CompileError(diagnostic);
    }
    if let Some(diagnostic) =
        error_diagnostic(&response.full_runtime_error, &response.runtime_error)
    {
        return JudgeOutcome::RuntimeError(diagnostic);
    }

    let total_correct = response.total_correct.unwrap_or_default();
    let total_testcases = response.total_testcases.unwrap_or_default();
    let cases = run_cases(response, sample_input);
    let finished =
        response.status_msg == ACCEPTED_STATUS || response.status_msg == FINISHED_STATUS;

    if finished && response.correct_answer {
        JudgeOutcome::Accepted(AcceptedReport {
            total_correct,
            total_testcases,
            elapsed_time_ms: response.elapsed_time,
            cases,
            ..AcceptedReport::default()
        })
    } else if finished {
        JudgeOutcome::WrongAnswer(WrongAnswerReport {
            total_correct,
            total_testcases,
            cases,
        })
    } else {
        JudgeOutcome::Unknown(UnknownReport {
            status: response.status_msg.clone(),
            total_correct,
            total_testcases,
            last_input: response.input_formatted.first().cloned(),
        })
    }
}

/// 採点付き提出結果の分類。status_msg だけで成否が決まる。
pub fn classify_submission(response: &SubmitCheckResponse) -> JudgeOutcome {
    if let Some(diagnostic) =
        error_diagnostic(&response.full_compile_error, &response.compile_error)
    {
        return JudgeOutcome::CompileError(diagnostic);
    }
    if let Some(diagnostic) =
        error_diagnostic(&response.full_runtime_error, &response.runtime_error)
    {
        return JudgeOutcome::RuntimeError(diagnostic);
    }

    let total_correct = response.total_correct.unwrap_or_default();
    let total_testcases = response.total_testcases.unwrap_or_default();

    match response.status_msg.as_str() {
        ACCEPTED_STATUS => JudgeOutcome::Accepted(AcceptedReport {
            total_correct,
            total_testcases,
            runtime: response.status_runtime.clone(),
            runtime_percentile: response.runtime_percentile,
            memory: response.status_memory.clone(),
            memory_percentile: response.memory_percentile,
            ..AcceptedReport::default()
        }),
        WRONG_ANSWER_STATUS => JudgeOutcome::WrongAnswer(WrongAnswerReport {
            total_correct,
            total_testcases,
            cases: vec![CaseReport {
                input: response.input_formatted.clone().unwrap_or_default(),
                output: response.code_output.clone().unwrap_or_default(),
                expected: response.expected_output.clone().unwrap_or_default(),
                stdout: response.std_output.clone().unwrap_or_default(),
            }],
        }),
        status => JudgeOutcome::Unknown(UnknownReport {
            status: String::from(status),
            total_correct,
            total_testcases,
            last_input: response.input_formatted.clone(),
        }),
    }
}

/// 完全版と簡易版のうち、情報量の多い方の診断テキストを選ぶ
fn error_diagnostic(full: &Option<String>, brief: &Option<String>) -> Option<String> {
    match (full.as_deref(), brief.as_deref()) {
        (Some(full), _) if !full.is_empty() => Some(String::from(full)),
        (_, Some(brief)) if !brief.is_empty() => Some(String::from(brief)),
        _ => None,
    }
}

/// ドライランのケース情報を組み立てる
///
/// ケース数は total_testcases を信頼する(code_answer に空要素が
/// 紛れ込むことがある)。入力が返されなかった最初のケースだけは
/// サンプル入力で補う。
fn run_cases(response: &RunCheckResponse, sample_input: &str) -> Vec<CaseReport> {
    let count = match response.total_testcases {
        Some(count) if count > 0 => count as usize,
        _ => response.code_answer.len(),
    };

    (0..count)
        .map(|i| {
            let input = match response.input_formatted.get(i) {
                Some(input) => input.clone(),
                None if i == 0 && !sample_input.is_empty() => {
                    sample_input.replace('\n', " ")
                }
                None => String::new(),
            };
            CaseReport {
                input,
                output: response.code_answer.get(i).cloned().unwrap_or_default(),
                expected: response.expected_answer.get(i).cloned().unwrap_or_default(),
                stdout: response.std_output.get(i).cloned().unwrap_or_default(),
            }
        })
        .collect()
}
