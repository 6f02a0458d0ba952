//! [`GitHubApi`] implementation backed by octocrab.

use super::types::MergeCommitBody;
use super::{ApiError, Comparison, GitHubApi, MergeRequest, MergeResponse};
use crate::pull_request::RepoRef;
use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::debug;

/// Authenticated GitHub REST client.
#[derive(Clone)]
pub struct OctocrabClient {
    octocrab: Octocrab,
}

impl OctocrabClient {
    /// Builds a client authenticated with a token.
    ///
    /// `api_url` overrides the API base URI, e.g. for GitHub Enterprise Server.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the base URI is invalid or the client can't be built.
    pub fn new(token: &str, api_url: Option<&str>) -> Result<Self, ApiError> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());
        if let Some(api_url) = api_url {
            builder = builder.base_uri(api_url.to_string())?;
        }
        Ok(Self {
            octocrab: builder.build()?,
        })
    }
}

/// Route for comparing two refs. Labels are user-controlled and may contain
/// `#`, `?` or non-ASCII characters, so each one is percent-encoded.
fn compare_route(repo: &RepoRef, base: &str, head: &str) -> String {
    format!(
        "/repos/{}/{}/compare/{}...{}",
        repo.owner,
        repo.name,
        urlencoding::encode(base),
        urlencoding::encode(head)
    )
}

#[async_trait]
impl GitHubApi for OctocrabClient {
    async fn compare(
        &self,
        repo: &RepoRef,
        base: &str,
        head: &str,
    ) -> Result<Comparison, ApiError> {
        let route = compare_route(repo, base, head);
        debug!(route = %route, "Comparing refs");

        let comparison: Comparison = self.octocrab.get(route, None::<&()>).await?;
        Ok(comparison)
    }

    async fn merge_branch(
        &self,
        repo: &RepoRef,
        request: &MergeRequest,
    ) -> Result<MergeResponse, ApiError> {
        let route = format!("/repos/{}/{}/merges", repo.owner, repo.name);
        debug!(route = %route, base = %request.base, head = %request.head, "Merging branch");

        // The typed helpers can't tell 201 from 200 and fail on the empty 204 body.
        let response = self.octocrab._post(route, Some(request)).await?;
        let response = octocrab::map_github_error(response).await?;

        match response.status().as_u16() {
            204 => Ok(MergeResponse::NothingToMerge),
            status => {
                let body = self.octocrab.body_to_string(response).await?;
                let commit: MergeCommitBody = serde_json::from_str(&body)?;
                if status == 201 {
                    Ok(MergeResponse::Created { sha: commit.sha })
                } else {
                    Ok(MergeResponse::Merged { sha: commit.sha })
                }
            }
        }
    }

    async fn update_description(
        &self,
        repo: &RepoRef,
        pull_number: u64,
        body: &str,
    ) -> Result<(), ApiError> {
        debug!(repo = %repo, pull_number, "Updating pull request description");

        self.octocrab
            .pulls(&repo.owner, &repo.name)
            .update(pull_number)
            .body(body)
            .send()
            .await?;

        Ok(())
    }
}
