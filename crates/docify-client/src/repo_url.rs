//! Repository URL helpers

/// Project title for a repository URL
///
/// The last path segment with a trailing `.git` removed. Trailing slashes are
/// ignored, so `https://github.com/org/repo/` yields `repo`.
pub fn project_title(url: &str) -> String {
    let url = url.trim().trim_end_matches('/');
    let segment = url.rsplit(['/', ':']).next().unwrap_or(url);
    segment.strip_suffix(".git").unwrap_or(segment).to_string()
}

/// Parse a GitHub repository URL into `(owner, repo)`
///
/// Accepts `https://github.com/org/repo[.git]`, `http://…`, `git@github.com:org/repo[.git]`
/// and the short `github.com/org/repo`. Any other host yields `None`.
pub fn parse_github_url(url: &str) -> Option<(String, String)> {
    let url = url.trim();

    // Try HTTPS format: https://github.com/org/repo[.git]
    let without_scheme = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let without_www = without_scheme
        .strip_prefix("www.")
        .unwrap_or(without_scheme);
    if let Some(rest) = without_www.strip_prefix("github.com/") {
        return parse_owner_repo_path(rest);
    }

    // Try SSH format: git@github.com:org/repo[.git]
    if let Some(rest) = url.strip_prefix("git@github.com:") {
        return parse_owner_repo_path(rest);
    }

    None
}

/// Parse "org/repo[.git]" into (org, repo)
fn parse_owner_repo_path(path: &str) -> Option<(String, String)> {
    let mut parts = path.trim_end_matches('/').split('/');
    let owner = parts.next().filter(|p| !p.is_empty())?;
    let repo = parts.next().filter(|p| !p.is_empty())?;
    let repo = repo.strip_suffix(".git").unwrap_or(repo);

    if repo.is_empty() {
        return None;
    }
    Some((owner.to_string(), repo.to_string()))
}
