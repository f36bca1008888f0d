use crate::leetcode::client::{LeetCodeClient, LeetCodeError, Site};
use crate::leetcode::model::{
    DailyChallenge, DailyChallengeResponse, Problem, ProblemDetail, QuestionDetailResponse,
    QuestionListResponse, UserStatus, UserStatusResponse,
};
use serde_json::json;

type Result<T> = std::result::Result<T, LeetCodeError>;

/// キーワード検索で問い合わせる問題数の上限
pub const SEARCH_RESULT_LIMIT: usize = 20;

/// CN サイトの V2 一覧クエリ
const QUESTION_LIST_QUERY_V2: &str = "
    query problemsetQuestionListV2($categorySlug: String, $limit: Int, $skip: Int) {
        problemsetQuestionListV2(
            categorySlug: $categorySlug
            limit: $limit
            skip: $skip
        ) {
            questions {
                questionFrontendId
                title
                translatedTitle
                titleSlug
                difficulty
                status
                paidOnly
            }
        }
    }";

/// COM サイトは旧形式の一覧クエリしか受け付けない
const QUESTION_LIST_QUERY_V1: &str = "
    query problemsetQuestionList($categorySlug: String, $limit: Int, $skip: Int) {
        problemsetQuestionList(
            categorySlug: $categorySlug
            limit: $limit
            skip: $skip
        ) {
            total
            questions {
                questionFrontendId
                title
                translatedTitle
                titleSlug
                difficulty
                status
                isPaidOnly
            }
        }
    }";

const QUESTION_DETAIL_QUERY: &str = "
    query questionData($titleSlug: String!) {
        question(titleSlug: $titleSlug) {
            questionId
            questionFrontendId
            title
            translatedTitle
            titleSlug
            content
            translatedContent
            difficulty
            sampleTestCase
            codeSnippets {
                lang
                langSlug
                code
            }
        }
    }";

const SEARCH_BY_IDS_QUERY: &str = "
    query problemsetQuestionListV2($filters: QuestionFilterInput, $limit: Int) {
        problemsetQuestionListV2(
            filters: $filters
            limit: $limit
        ) {
            questions {
                questionFrontendId
                title
                translatedTitle
                titleSlug
                difficulty
                status
                paidOnly
            }
        }
    }";

const DAILY_CHALLENGE_QUERY_COM: &str = "
    query questionOfToday {
        activeDailyCodingChallengeQuestion {
            date
            question {
                questionFrontendId
                title
                translatedTitle
                titleSlug
                difficulty
                status
                paidOnly
            }
        }
    }";

const DAILY_CHALLENGE_QUERY_CN: &str = "
    query questionOfToday {
        todayRecord {
            date
            question {
                questionFrontendId
                title
                translatedTitle
                titleSlug
                difficulty
                status
                paidOnly
            }
        }
    }";

const USER_STATUS_QUERY: &str = "
    query globalData {
        userStatus {
            isSignedIn
            username
        }
    }";

impl LeetCodeClient {
    /// 問題一覧をページングで取得する
    pub async fn fetch_problems(&self, limit: u32, skip: u32) -> Result<Vec<Problem>> {
        let query = match self.site() {
            Site::Cn => QUESTION_LIST_QUERY_V2,
            Site::Com => QUESTION_LIST_QUERY_V1,
        };
        let response: QuestionListResponse = self
            .graphql(
                query,
                json!({"categorySlug": "", "limit": limit, "skip": skip}),
            )
            .await?;
        let questions = response.into_questions();
        tracing::info!("{} questions retrieved", questions.len());

        Ok(questions)
    }

    /// スラッグから問題詳細を取得する
    ///
    /// 存在しないスラッグに対してサーバはエラーではなく空の question を
    /// 返すため、タイトルの有無で判定する。
    pub async fn fetch_problem_detail(&self, slug: &str) -> Result<ProblemDetail> {
        let response: QuestionDetailResponse = self
            .graphql(QUESTION_DETAIL_QUERY, json!({"titleSlug": slug}))
            .await?;

        match response.data.and_then(|data| data.question) {
            Some(detail) if !detail.title.is_empty() => Ok(detail),
            _ => Err(LeetCodeError::ProblemNotFound(String::from(slug))),
        }
    }

    /// キーワード検索
    ///
    /// REST の絞り込みエンドポイントで内部 ID のリストを取得し、
    /// GraphQL でまとめて問題情報を引く二段構え。
    pub async fn search_problems(&self, keyword: &str) -> Result<Vec<Problem>> {
        let mut ids: Vec<i64> = self
            .get_json(
                "/problems/api/filter-questions/all/",
                &[("search_keywords", keyword)],
            )
            .await?;

        if ids.is_empty() {
            return Ok(Vec::new());
        }
        ids.truncate(SEARCH_RESULT_LIMIT);

        let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
        let response: QuestionListResponse = self
            .graphql(
                SEARCH_BY_IDS_QUERY,
                json!({
                    "limit": SEARCH_RESULT_LIMIT,
                    "filters": {"questionIds": ids},
                }),
            )
            .await?;

        Ok(response.into_questions())
    }

    /// 本日のデイリーチャレンジを取得する。クエリはサイトごとに異なる。
    pub async fn fetch_daily_challenge(&self) -> Result<DailyChallenge> {
        let query = match self.site() {
            Site::Com => DAILY_CHALLENGE_QUERY_COM,
            Site::Cn => DAILY_CHALLENGE_QUERY_CN,
        };
        let response: DailyChallengeResponse = self.graphql(query, json!({})).await?;

        response.into_daily().ok_or_else(|| {
            LeetCodeError::UnexpectedError(String::from("no daily challenge in response"))
        })
    }

    /// ログイン状態の確認。Cookie の検証に使う。
    pub async fn fetch_user_status(&self) -> Result<UserStatus> {
        let response: UserStatusResponse = self.graphql(USER_STATUS_QUERY, json!({})).await?;

        response
            .data
            .and_then(|data| data.user_status)
            .ok_or_else(|| {
                LeetCodeError::UnexpectedError(String::from("no user status in response"))
            })
    }
}
