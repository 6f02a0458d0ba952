//! Recording GitHub API double.

#![allow(dead_code)]

use async_trait::async_trait;
use rebase_checkbox::{ApiError, Comparison, GitHubApi, MergeRequest, MergeResponse, RepoRef};
use std::sync::Mutex;

/// Call record for `compare`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareCall {
    pub repo: RepoRef,
    pub base: String,
    pub head: String,
}

/// Call record for `merge_branch`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeCall {
    pub repo: RepoRef,
    pub request: MergeRequest,
}

/// Call record for `update_description`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCall {
    pub repo: RepoRef,
    pub pull_number: u64,
    pub body: String,
}

/// Injected error, rebuilt on every call since `ApiError` isn't `Clone`.
#[derive(Debug, Clone)]
struct InjectedError {
    status: u16,
    message: String,
}

impl InjectedError {
    fn to_api_error(&self) -> ApiError {
        ApiError::Status {
            status: self.status,
            message: self.message.clone(),
        }
    }
}

/// Simple mock GitHub API for testing
///
/// Features:
/// - Configurable comparison and merge responses
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockGitHub {
    comparison: Mutex<Comparison>,
    merge_response: Mutex<MergeResponse>,
    // Call tracking
    compare_calls: Mutex<Vec<CompareCall>>,
    merge_calls: Mutex<Vec<MergeCall>>,
    update_calls: Mutex<Vec<UpdateCall>>,
    // Error injection
    error_on_compare: Mutex<Option<InjectedError>>,
    error_on_merge: Mutex<Option<InjectedError>>,
    error_on_update: Mutex<Option<InjectedError>>,
}

impl MockGitHub {
    /// Create a mock whose head branch is `behind_by` commits behind base
    pub fn behind_by(behind_by: u64) -> Self {
        Self {
            comparison: Mutex::new(Comparison {
                ahead_by: 1,
                behind_by,
                status: (if behind_by == 0 { "ahead" } else { "diverged" }).to_string(),
            }),
            merge_response: Mutex::new(MergeResponse::Created {
                sha: "6dcb09b5b57875f334f61aebed695e2e4193db5e".to_string(),
            }),
            compare_calls: Mutex::new(Vec::new()),
            merge_calls: Mutex::new(Vec::new()),
            update_calls: Mutex::new(Vec::new()),
            error_on_compare: Mutex::new(None),
            error_on_merge: Mutex::new(None),
            error_on_update: Mutex::new(None),
        }
    }

    /// Set the full comparison response
    pub fn set_comparison(&self, comparison: Comparison) {
        *self.comparison.lock().unwrap() = comparison;
    }

    /// Set the response for `merge_branch`
    pub fn set_merge_response(&self, response: MergeResponse) {
        *self.merge_response.lock().unwrap() = response;
    }

    // === Error injection methods ===

    /// Make `compare` return an error
    pub fn fail_compare(&self, status: u16, message: &str) {
        *self.error_on_compare.lock().unwrap() = Some(InjectedError {
            status,
            message: message.to_string(),
        });
    }

    /// Make `merge_branch` return an error
    pub fn fail_merge(&self, status: u16, message: &str) {
        *self.error_on_merge.lock().unwrap() = Some(InjectedError {
            status,
            message: message.to_string(),
        });
    }

    /// Make `merge_branch` report a merge conflict, as GitHub does
    pub fn conflict_on_merge(&self) {
        self.fail_merge(409, "Merge conflict");
    }

    /// Make `update_description` return an error
    pub fn fail_update(&self, status: u16, message: &str) {
        *self.error_on_update.lock().unwrap() = Some(InjectedError {
            status,
            message: message.to_string(),
        });
    }

    // === Call inspection ===

    pub fn compare_calls(&self) -> Vec<CompareCall> {
        self.compare_calls.lock().unwrap().clone()
    }

    pub fn merge_calls(&self) -> Vec<MergeCall> {
        self.merge_calls.lock().unwrap().clone()
    }

    pub fn update_calls(&self) -> Vec<UpdateCall> {
        self.update_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GitHubApi for MockGitHub {
    async fn compare(
        &self,
        repo: &RepoRef,
        base: &str,
        head: &str,
    ) -> Result<Comparison, ApiError> {
        self.compare_calls.lock().unwrap().push(CompareCall {
            repo: repo.clone(),
            base: base.to_string(),
            head: head.to_string(),
        });

        if let Some(error) = self.error_on_compare.lock().unwrap().as_ref() {
            return Err(error.to_api_error());
        }
        Ok(self.comparison.lock().unwrap().clone())
    }

    async fn merge_branch(
        &self,
        repo: &RepoRef,
        request: &MergeRequest,
    ) -> Result<MergeResponse, ApiError> {
        self.merge_calls.lock().unwrap().push(MergeCall {
            repo: repo.clone(),
            request: request.clone(),
        });

        if let Some(error) = self.error_on_merge.lock().unwrap().as_ref() {
            return Err(error.to_api_error());
        }
        Ok(self.merge_response.lock().unwrap().clone())
    }

    async fn update_description(
        &self,
        repo: &RepoRef,
        pull_number: u64,
        body: &str,
    ) -> Result<(), ApiError> {
        self.update_calls.lock().unwrap().push(UpdateCall {
            repo: repo.clone(),
            pull_number,
            body: body.to_string(),
        });

        if let Some(error) = self.error_on_update.lock().unwrap().as_ref() {
            return Err(error.to_api_error());
        }
        Ok(())
    }
}
