mod common;

use common::mock_github::{CompareCall, MockGitHub};
use common::{fork_repo, open_pr, opted_in_body};
use rebase_checkbox::{
    decide, needs_update, Comparison, PrState, SkipReason, UpdateDecision,
};

#[tokio::test]
async fn merged_pr_is_skipped_regardless_of_divergence() {
    let api = MockGitHub::behind_by(10);
    let mut pr = open_pr(&opted_in_body());
    pr.merged = true;

    let decision = decide(&api, &pr).await.unwrap();

    assert_eq!(decision, UpdateDecision::Skip(SkipReason::Merged));
    assert!(api.compare_calls().is_empty());
}

#[tokio::test]
async fn closed_pr_is_skipped() {
    let api = MockGitHub::behind_by(10);
    let mut pr = open_pr(&opted_in_body());
    pr.state = PrState::Closed;

    let decision = decide(&api, &pr).await.unwrap();

    assert_eq!(
        decision,
        UpdateDecision::Skip(SkipReason::NotOpen(PrState::Closed))
    );
    assert!(api.compare_calls().is_empty());
}

#[tokio::test]
async fn merged_guard_wins_over_closed_guard() {
    let api = MockGitHub::behind_by(10);
    let mut pr = open_pr(&opted_in_body());
    pr.merged = true;
    pr.state = PrState::Closed;

    let decision = decide(&api, &pr).await.unwrap();
    assert_eq!(decision, UpdateDecision::Skip(SkipReason::Merged));
}

#[tokio::test]
async fn deleted_fork_is_skipped() {
    let api = MockGitHub::behind_by(10);
    let mut pr = open_pr(&opted_in_body());
    pr.head.repo = None;

    let decision = decide(&api, &pr).await.unwrap();

    assert_eq!(decision, UpdateDecision::Skip(SkipReason::ForkDeleted));
    assert!(api.compare_calls().is_empty());
}

#[tokio::test]
async fn up_to_date_branch_is_skipped() {
    let api = MockGitHub::behind_by(0);
    let pr = open_pr(&opted_in_body());

    let decision = decide(&api, &pr).await.unwrap();

    assert_eq!(decision, UpdateDecision::Skip(SkipReason::UpToDate));
}

#[tokio::test]
async fn branch_behind_base_needs_update() {
    let api = MockGitHub::behind_by(3);
    let pr = open_pr(&opted_in_body());

    let decision = decide(&api, &pr).await.unwrap();

    assert_eq!(decision, UpdateDecision::Update { behind_by: 3 });
    assert!(needs_update(&api, &pr).await.unwrap());
}

#[tokio::test]
async fn compares_base_against_head_in_head_repository() {
    let api = MockGitHub::behind_by(3);
    let pr = open_pr(&opted_in_body());

    decide(&api, &pr).await.unwrap();

    assert_eq!(
        api.compare_calls(),
        vec![CompareCall {
            repo: fork_repo(),
            base: "octo-org:main".to_string(),
            head: "contributor:feature".to_string(),
        }]
    );
}

#[tokio::test]
async fn head_ahead_of_base_does_not_need_update() {
    let api = MockGitHub::behind_by(0);
    api.set_comparison(Comparison {
        ahead_by: 5,
        behind_by: 0,
        status: "ahead".to_string(),
    });
    let pr = open_pr(&opted_in_body());

    assert!(!needs_update(&api, &pr).await.unwrap());
}

#[tokio::test]
async fn comparison_failure_is_propagated() {
    let api = MockGitHub::behind_by(3);
    api.fail_compare(404, "Not Found");
    let pr = open_pr(&opted_in_body());

    let error = decide(&api, &pr).await.unwrap_err();

    assert_eq!(error.base, "octo-org:main");
    assert_eq!(error.head, "contributor:feature");
    assert_eq!(error.repo, fork_repo());
}
