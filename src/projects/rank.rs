use crate::github::types::Repository;

/// Drops private and forked entries, then orders by descending star count.
/// `sort_by` is stable, so ties keep the API's order.
pub fn rank(repos: Vec<Repository>) -> Vec<Repository> {
    let mut projects: Vec<Repository> = repos
        .into_iter()
        .filter(|r| !r.private && !r.fork)
        .collect();
    projects.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    projects
}
