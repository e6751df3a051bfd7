//! "Refresh now" action.
//!
//! Asks the CI system to run the data collection workflow immediately. The
//! request is fire-and-forget: success only means the dispatch was accepted.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Serialize;
use tracing::{error, info, instrument};

use crate::config::TriggerConfig;
use crate::error::AppError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerReceipt {
    pub message: String,
}

#[async_trait]
pub trait UpdateTrigger: Send + Sync {
    async fn request_refresh(&self) -> Result<TriggerReceipt, AppError>;
}

#[derive(Serialize)]
struct DispatchBody<'a> {
    #[serde(rename = "ref")]
    git_ref: &'a str,
}

/// Triggers a GitHub Actions `workflow_dispatch` event.
#[derive(Clone)]
pub struct GithubWorkflowTrigger {
    http: Client,
    api_base: String,
    owner: String,
    repo: String,
    workflow: String,
    git_ref: String,
    token: String,
}

impl GithubWorkflowTrigger {
    pub fn from_config(cfg: &TriggerConfig) -> Result<Self, AppError> {
        let token = cfg
            .token
            .clone()
            .ok_or(AppError::TriggerNotConfigured("GITHUB_PAT is not set"))?;
        let owner = cfg
            .owner
            .clone()
            .ok_or(AppError::TriggerNotConfigured("REPO_OWNER is not set"))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            api_base: cfg.api_base.trim_end_matches('/').to_string(),
            owner,
            repo: cfg.repo.clone(),
            workflow: cfg.workflow.clone(),
            git_ref: cfg.git_ref.clone(),
            token,
        })
    }

    pub fn dispatch_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/actions/workflows/{}/dispatches",
            self.api_base, self.owner, self.repo, self.workflow
        )
    }
}

#[async_trait]
impl UpdateTrigger for GithubWorkflowTrigger {
    #[instrument(
        skip(self),
        fields(repo = %format!("{}/{}", self.owner, self.repo), workflow = %self.workflow),
        level = "debug"
    )]
    async fn request_refresh(&self) -> Result<TriggerReceipt, AppError> {
        let resp = self
            .http
            .post(self.dispatch_url())
            .header(ACCEPT, "application/vnd.github.v3+json")
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(USER_AGENT, "strategic-cockpit")
            .json(&DispatchBody {
                git_ref: &self.git_ref,
            })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let details = resp.text().await.unwrap_or_default();
            return Err(AppError::TriggerRejected {
                status: status.as_u16(),
                details,
            });
        }

        Ok(TriggerReceipt {
            message: "Data refresh triggered successfully".to_string(),
        })
    }
}

/// Run a refresh request and log its outcome.
pub async fn request_refresh(trigger: &dyn UpdateTrigger) -> Result<TriggerReceipt, AppError> {
    match trigger.request_refresh().await {
        Ok(receipt) => {
            info!(message = %receipt.message, "refresh requested");
            Ok(receipt)
        }
        Err(e) => {
            error!(error = %e, "refresh request failed");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(token: Option<&str>, owner: Option<&str>) -> TriggerConfig {
        TriggerConfig {
            token: token.map(str::to_string),
            owner: owner.map(str::to_string),
            repo: "strategic-cockpit-dashboard".into(),
            workflow: "update_data.yml".into(),
            git_ref: "main".into(),
            api_base: "https://api.github.com/".into(),
        }
    }

    #[test]
    fn missing_token_is_not_configured() {
        let err = GithubWorkflowTrigger::from_config(&cfg(None, Some("acme"))).err().unwrap();
        assert!(matches!(err, AppError::TriggerNotConfigured(msg) if msg.contains("GITHUB_PAT")));
    }

    #[test]
    fn missing_owner_is_not_configured() {
        let err = GithubWorkflowTrigger::from_config(&cfg(Some("t"), None)).err().unwrap();
        assert!(matches!(err, AppError::TriggerNotConfigured(msg) if msg.contains("REPO_OWNER")));
    }

    #[test]
    fn dispatch_url_targets_workflow() {
        let t = GithubWorkflowTrigger::from_config(&cfg(Some("t"), Some("acme"))).unwrap();

        assert_eq!(
            t.dispatch_url(),
            "https://api.github.com/repos/acme/strategic-cockpit-dashboard/actions/workflows/update_data.yml/dispatches"
        );
    }

    #[test]
    fn body_uses_ref_key() {
        let body = serde_json::to_string(&DispatchBody { git_ref: "main" }).unwrap();
        assert_eq!(body, r#"{"ref":"main"}"#);
    }
}
