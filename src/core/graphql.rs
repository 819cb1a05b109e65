use crate::core::{AccountSnapshot, ContributionCalendar};
use crate::utils::error::{HeaderError, Result};
use chrono::{DateTime, Utc};
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const CLIENT_USER_AGENT: &str = "GitHub-Profile-Generator";

pub const USER_QUERY: &str = r#"
    query($username: String!) {
      user(login: $username) {
        createdAt
        repositories(first: 100, ownerAffiliations: OWNER) {
          totalCount
        }
        contributionsCollection {
          contributionCalendar {
            totalContributions
            weeks {
              contributionDays {
                contributionCount
                date
                weekday
              }
            }
          }
          totalCommitContributions
        }
      }
    }
"#;

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: UserVariables<'a>,
}

#[derive(Debug, Serialize)]
pub struct UserVariables<'a> {
    pub username: &'a str,
}

/// GraphQL 回應外層；`errors` 在解析前已另行檢查
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    pub data: Option<UserData>,
}

#[derive(Debug, Deserialize)]
pub struct UserData {
    pub user: Option<UserNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserNode {
    pub created_at: DateTime<Utc>,
    pub repositories: RepositoryConnection,
    pub contributions_collection: ContributionsCollection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryConnection {
    pub total_count: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsCollection {
    pub contribution_calendar: ContributionCalendar,
    pub total_commit_contributions: u64,
}

impl TryFrom<UserNode> for AccountSnapshot {
    type Error = HeaderError;

    fn try_from(node: UserNode) -> Result<Self> {
        let calendar = node.contributions_collection.contribution_calendar;

        let bad_day = calendar
            .weeks
            .iter()
            .flat_map(|week| week.contribution_days.iter())
            .find(|day| day.weekday > 6);
        if let Some(day) = bad_day {
            return Err(HeaderError::ResponseFormatError {
                message: format!("weekday {} on {} is outside 0-6", day.weekday, day.date),
            });
        }

        Ok(AccountSnapshot {
            created_at: node.created_at,
            repository_count: node.repositories.total_count,
            total_commit_contributions: node.contributions_collection.total_commit_contributions,
            contribution_calendar: calendar,
        })
    }
}

pub struct GraphQlClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl GraphQlClient {
    pub fn new(endpoint: &str, token: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(CLIENT_USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            token: token.to_string(),
        })
    }

    /// 發送唯一一次查詢，不重試
    pub async fn fetch_account_snapshot(&self, username: &str) -> Result<AccountSnapshot> {
        let body = GraphQlRequest {
            query: USER_QUERY,
            variables: UserVariables { username },
        };

        tracing::debug!("Making GraphQL request to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        let text = response.text().await?;

        parse_response(status, &text)
    }
}

pub fn parse_response(status: reqwest::StatusCode, body: &str) -> Result<AccountSnapshot> {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) if !status.is_success() => {
            return Err(HeaderError::RemoteRejectionError {
                details: format!("HTTP {}: {}", status, body.trim()),
            });
        }
        Err(e) => {
            return Err(HeaderError::ResponseFormatError {
                message: e.to_string(),
            });
        }
    };

    if let Some(errors) = value.get("errors").filter(|errors| !errors.is_null()) {
        return Err(HeaderError::RemoteRejectionError {
            details: describe_errors(errors),
        });
    }

    if !status.is_success() {
        return Err(HeaderError::RemoteRejectionError {
            details: format!("HTTP {}: {}", status, body.trim()),
        });
    }

    let response: GraphQlResponse =
        serde_json::from_value(value).map_err(|e| HeaderError::ResponseFormatError {
            message: e.to_string(),
        })?;

    let user = response
        .data
        .and_then(|data| data.user)
        .ok_or_else(|| HeaderError::ResponseFormatError {
            message: "response does not contain data.user".to_string(),
        })?;

    AccountSnapshot::try_from(user)
}

/// 盡量取出每個錯誤的 message，否則回傳原始 JSON
fn describe_errors(errors: &serde_json::Value) -> String {
    let messages: Vec<&str> = errors
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("message").and_then(|m| m.as_str()))
                .collect()
        })
        .unwrap_or_default();

    if messages.is_empty() {
        errors.to_string()
    } else {
        messages.join("; ")
    }
}
