//! Jira tracker service implementation

use crate::error::{Error, Result};
use crate::tracker::TrackerService;
use crate::types::{
    Board, Component, CreatedIssue, IssueType, NewIssue, Project, Sprint, TrackerConfig,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Upper bound on board pages fetched, in case a server never sets `isLast`
const MAX_BOARD_PAGES: usize = 200;

/// Jira service using reqwest and HTTP basic auth
pub struct JiraService {
    client: Client,
    base_url: String,
    config: TrackerConfig,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Page<T> {
    #[serde(default = "Vec::new")]
    values: Vec<T>,
    #[serde(default)]
    is_last: Option<bool>,
}

#[derive(Deserialize)]
struct BoardDto {
    id: u64,
    name: String,
    #[serde(default)]
    location: Option<BoardLocation>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BoardLocation {
    project_name: Option<String>,
    display_name: Option<String>,
}

#[derive(Deserialize)]
struct ProjectDto {
    id: String,
    key: String,
    name: String,
}

#[derive(Deserialize)]
struct ComponentDto {
    id: String,
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SprintDto {
    id: u64,
    name: String,
    state: String,
    #[serde(default)]
    start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    end_date: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct CreatedIssueDto {
    id: String,
    key: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserDto {
    name: Option<String>,
    display_name: Option<String>,
}

#[derive(Serialize)]
struct CreateIssuePayload<'a> {
    fields: IssueFields<'a>,
}

#[derive(Serialize)]
struct IssueFields<'a> {
    project: KeyRef<'a>,
    summary: &'a str,
    description: &'a str,
    issuetype: NameRef<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    assignee: Option<NameRef<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    components: Vec<IdRef<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<KeyRef<'a>>,
}

#[derive(Serialize)]
struct KeyRef<'a> {
    key: &'a str,
}

#[derive(Serialize)]
struct NameRef<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct IdRef<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct SprintIssuesPayload<'a> {
    issues: &'a [String],
}

impl From<BoardDto> for Board {
    fn from(dto: BoardDto) -> Self {
        let project_name = dto
            .location
            .and_then(|loc| loc.project_name.or(loc.display_name));
        Self {
            id: dto.id,
            name: dto.name,
            project_name,
        }
    }
}

impl From<SprintDto> for Sprint {
    fn from(dto: SprintDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            state: dto.state,
            start_date: dto.start_date,
            end_date: dto.end_date,
        }
    }
}

impl JiraService {
    /// Create a new Jira service
    pub fn new(config: TrackerConfig) -> Result<Self> {
        let parsed = Url::parse(&config.server)
            .map_err(|e| Error::InvalidUrl(format!("{}: {e}", config.server)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::InvalidUrl(format!(
                "{}: unsupported scheme '{}'",
                config.server,
                parsed.scheme()
            )));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: config.server.trim_end_matches('/').to_string(),
            config,
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn browse_url(&self, key: &str) -> String {
        format!("{}/browse/{key}", self.base_url)
    }

    fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .basic_auth(&self.config.user, Some(&self.config.password))
            .header("Accept", "application/json")
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.api_url(path);
        debug!("GET {url}");

        let response = self
            .authed(self.client.get(&url))
            .query(query)
            .send()
            .await?;

        Ok(check_status(response).await?.json().await?)
    }
}

/// Map non-success statuses to crate errors, keeping the response body
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = if body.trim().is_empty() {
        status.to_string()
    } else {
        format!("{status}: {}", body.trim())
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(Error::Auth(detail)),
        _ => Err(Error::TrackerApi(detail)),
    }
}

#[async_trait]
impl TrackerService for JiraService {
    async fn list_boards(&self) -> Result<Vec<Board>> {
        let mut boards = Vec::new();

        for _ in 0..MAX_BOARD_PAGES {
            let page: Page<BoardDto> = self
                .get_json(
                    "/rest/agile/1.0/board",
                    &[("startAt", boards.len().to_string())],
                )
                .await?;

            let fetched = page.values.len();
            boards.extend(page.values.into_iter().map(Board::from));

            if fetched == 0 || page.is_last.unwrap_or(true) {
                break;
            }
        }

        debug!("Found {} boards", boards.len());
        Ok(boards)
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        let projects: Vec<ProjectDto> = self.get_json("/rest/api/2/project", &[]).await?;

        Ok(projects
            .into_iter()
            .map(|p| Project {
                id: p.id,
                key: p.key,
                name: p.name,
            })
            .collect())
    }

    async fn list_components(&self, project_key: &str) -> Result<Vec<Component>> {
        let path = format!(
            "/rest/api/2/project/{}/components",
            urlencoding::encode(project_key)
        );
        let components: Vec<ComponentDto> = self.get_json(&path, &[]).await?;

        Ok(components
            .into_iter()
            .map(|c| Component {
                id: c.id,
                name: c.name,
            })
            .collect())
    }

    async fn create_issue(&self, issue: &NewIssue) -> Result<CreatedIssue> {
        let url = self.api_url("/rest/api/2/issue");

        let payload = CreateIssuePayload {
            fields: IssueFields {
                project: KeyRef {
                    key: &issue.project_key,
                },
                summary: &issue.summary,
                description: &issue.description,
                issuetype: NameRef {
                    name: issue.issue_type.jira_name(),
                },
                assignee: issue.assignee.as_deref().map(|name| NameRef { name }),
                components: issue.component_ids.iter().map(|id| IdRef { id }).collect(),
                parent: match issue.issue_type {
                    IssueType::SubTask => issue.parent_key.as_deref().map(|key| KeyRef { key }),
                    IssueType::Task => None,
                },
            },
        };

        debug!("POST {url} ({})", issue.summary);
        let response = self
            .authed(self.client.post(&url))
            .json(&payload)
            .send()
            .await?;

        let created: CreatedIssueDto = check_status(response).await?.json().await?;

        Ok(CreatedIssue {
            url: self.browse_url(&created.key),
            id: created.id,
            key: created.key,
        })
    }

    async fn list_sprints(&self, board_id: u64, max_results: u32) -> Result<Vec<Sprint>> {
        let path = format!("/rest/agile/1.0/board/{board_id}/sprint");
        let page: Page<SprintDto> = self
            .get_json(
                &path,
                &[
                    ("state", "active,future".to_string()),
                    ("maxResults", max_results.to_string()),
                ],
            )
            .await?;

        Ok(page.values.into_iter().map(Sprint::from).collect())
    }

    async fn add_issues_to_sprint(&self, sprint_id: u64, issue_keys: &[String]) -> Result<()> {
        let url = self.api_url(&format!("/rest/agile/1.0/sprint/{sprint_id}/issue"));
        debug!("POST {url} ({} issues)", issue_keys.len());

        let response = self
            .authed(self.client.post(&url))
            .json(&SprintIssuesPayload { issues: issue_keys })
            .send()
            .await?;

        check_status(response).await?;
        Ok(())
    }

    async fn current_user(&self) -> Result<String> {
        let user: UserDto = self.get_json("/rest/api/2/myself", &[]).await?;

        user.name
            .or(user.display_name)
            .ok_or_else(|| Error::TrackerApi("user response has no name".to_string()))
    }

    fn config(&self) -> &TrackerConfig {
        &self.config
    }
}
