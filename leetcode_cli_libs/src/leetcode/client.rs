use reqwest::{header, Client, RequestBuilder, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;
use tokio::time::Duration;

type Result<T> = std::result::Result<T, LeetCodeError>;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// デシリアライズに失敗したとき、エラーに添付するレスポンス本文の最大文字数
const PAYLOAD_PREVIEW_LIMIT: usize = 200;

#[derive(Debug, Error)]
pub enum LeetCodeError {
    #[error("failed to request to leetcode")]
    RequestError(#[from] reqwest::Error),
    #[error("failed to deserialize response, payload preview [{preview}]")]
    DeserializeError {
        #[source]
        source: serde_json::Error,
        preview: String,
    },
    #[error("invalid leetcode url given")]
    InvalidUrlError(#[from] url::ParseError),
    #[error("problem not found: {0}")]
    ProblemNotFound(String),
    #[error("{0}")]
    UnexpectedError(String),
}

/// 接続先サイト。エンドポイントと一部のクエリが異なる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Site {
    Com,
    Cn,
}

impl Site {
    pub fn base_url(&self) -> &'static str {
        match self {
            Site::Com => "https://leetcode.com",
            Site::Cn => "https://leetcode.cn",
        }
    }

    pub fn domain(&self) -> &'static str {
        match self {
            Site::Com => "leetcode.com",
            Site::Cn => "leetcode.cn",
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Site::Com => write!(f, "com"),
            Site::Cn => write!(f, "cn"),
        }
    }
}

impl FromStr for Site {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "com" => Ok(Site::Com),
            "cn" => Ok(Site::Cn),
            _ => Err(format!("site must be 'cn' or 'com', got '{}'", s)),
        }
    }
}

pub struct LeetCodeClient {
    site: Site,
    base_url: Url,
    graphql_url: Url,
    cookie: String,
    csrf_token: Option<String>,
    client: Client,
}

impl LeetCodeClient {
    pub fn new(site: Site, cookie: &str) -> Result<Self> {
        let base_url = Url::parse(site.base_url())?;
        let graphql_url = base_url.join("/graphql/")?;
        let client = Client::builder()
            .gzip(true)
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(LeetCodeClient {
            site,
            base_url,
            graphql_url,
            cookie: String::from(cookie),
            csrf_token: extract_csrf(cookie),
            client,
        })
    }

    pub fn site(&self) -> Site {
        self.site
    }

    /// Cookie と csrftoken を含む共通ヘッダを付与する
    fn decorate(&self, request: RequestBuilder) -> RequestBuilder {
        let mut request = request
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::ORIGIN, self.site.base_url())
            .header(header::REFERER, format!("{}/", self.site.base_url()));
        if !self.cookie.is_empty() {
            request = request.header(header::COOKIE, &self.cookie);
        }
        if let Some(token) = &self.csrf_token {
            request = request.header("x-csrftoken", token);
        }
        request
    }

    pub async fn get_json<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.base_url.join(path)?;
        tracing::debug!("GET {}", url);
        let res = self
            .decorate(self.client.get(url).query(query))
            .send()
            .await?;
        let body = res.text().await?;
        parse_payload(&body)
    }

    pub async fn post_json<T>(&self, path: &str, body: &impl Serialize) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.base_url.join(path)?;
        tracing::debug!("POST {}", url);
        let res = self
            .decorate(self.client.post(url).json(body))
            .send()
            .await?;
        let body = res.text().await?;
        parse_payload(&body)
    }

    pub async fn graphql<T>(&self, query: &str, variables: serde_json::Value) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let payload = serde_json::json!({
            "query": query,
            "variables": variables,
        });
        tracing::debug!("POST {}", self.graphql_url);
        let res = self
            .decorate(self.client.post(self.graphql_url.clone()).json(&payload))
            .send()
            .await?;
        let body = res.text().await?;
        parse_payload(&body)
    }
}

fn parse_payload<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| LeetCodeError::DeserializeError {
        source: e,
        preview: preview(body),
    })
}

/// エラー報告用に本文を切り詰める。マルチバイト境界を壊さないよう文字単位で切る。
fn preview(body: &str) -> String {
    let mut preview: String = body.chars().take(PAYLOAD_PREVIEW_LIMIT).collect();
    if preview.len() < body.len() {
        preview.push_str("...");
    }
    preview
}

fn extract_csrf(cookie: &str) -> Option<String> {
    cookie
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("csrftoken="))
        .map(String::from)
}
