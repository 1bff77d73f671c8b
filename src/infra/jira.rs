use async_trait::async_trait;
use reqwest::{
    Client, Request,
    header::{ACCEPT, AUTHORIZATION},
};
use serde::Deserialize;

use crate::domain::issue::Issue;
use crate::error::{AppError, AppResult};
use crate::services::{IssueQuery, IssueTrackerService};

pub struct JiraClient {
    http: Client,
    domain: String,
    token: String,
}

impl JiraClient {
    pub fn new(domain: String, token: String) -> Self {
        Self {
            http: Client::new(),
            domain,
            token,
        }
    }

    fn auth_header(token: &str) -> String {
        format!("Bearer {token}")
    }

    /// Accepts `host`, `host/` or `https://host` and always targets https.
    fn search_endpoint(domain: &str) -> String {
        let host = domain
            .trim()
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/');
        format!("https://{host}/rest/api/2/search")
    }

    fn search_request(&self, query: &IssueQuery) -> AppResult<Request> {
        let jql = query.to_jql();
        self.http
            .get(Self::search_endpoint(&self.domain))
            .query(&[("jql", jql.as_str())])
            .header(AUTHORIZATION, Self::auth_header(&self.token))
            .header(ACCEPT, "application/json")
            .build()
            .map_err(|err| {
                AppError::IssueTracker(format!("failed to build Jira request: {err}"))
            })
    }
}

#[async_trait]
impl IssueTrackerService for JiraClient {
    async fn search(&self, query: &IssueQuery) -> AppResult<Vec<Issue>> {
        let request = self.search_request(query)?;
        tracing::debug!(url = %request.url(), "searching Jira");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|err| AppError::IssueTracker(format!("failed to call Jira: {err}")))?;

        let status = response.status();
        let body = response.text().await.map_err(|err| {
            AppError::IssueTracker(format!("failed to read Jira response: {err}"))
        })?;

        if !status.is_success() {
            return Err(AppError::IssueTracker(format!(
                "Jira responded with {status}: {body}"
            )));
        }

        parse_search_response(&body)
    }
}

fn parse_search_response(body: &str) -> AppResult<Vec<Issue>> {
    let payload: JiraSearchResponse = serde_json::from_str(body).map_err(|err| {
        AppError::IssueTracker(format!("failed to parse Jira response: {err}"))
    })?;

    Ok(payload
        .issues
        .into_iter()
        .map(|issue| {
            let components = issue
                .fields
                .components
                .unwrap_or_default()
                .into_iter()
                .map(|component| component.name)
                .collect();
            Issue::new(issue.key, issue.fields.summary, components)
        })
        .collect())
}

#[derive(Deserialize)]
struct JiraSearchResponse {
    #[serde(default)]
    issues: Vec<JiraIssue>,
}

#[derive(Deserialize)]
struct JiraIssue {
    key: String,
    fields: JiraIssueFields,
}

#[derive(Deserialize)]
struct JiraIssueFields {
    summary: String,
    /// Jira sends `null` for issues without components.
    #[serde(default)]
    components: Option<Vec<JiraComponent>>,
}

#[derive(Deserialize)]
struct JiraComponent {
    name: String,
}
