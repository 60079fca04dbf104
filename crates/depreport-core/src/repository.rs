//! Repository URL parsing
//!
//! Accepted forms:
//! - `https://host/owner/repo.git` (also `http://`, `ssh://`, `git://`, optional `user@` and port)
//! - `user@host:owner/repo.git` (scp-like SSH shorthand, user optional)
//!
//! The `.git` suffix and a trailing `/` are optional.

use crate::error::{Error, Result};
use std::fmt;

const SCHEMES: [&str; 4] = ["https://", "http://", "ssh://", "git://"];

/// Owner and repository name extracted from a git remote URL
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositorySlug {
    /// Account or organization owning the repository
    pub owner: String,
    /// Repository name without `.git`
    pub name: String,
}

impl RepositorySlug {
    /// Parse a git remote URL into owner and repository name
    pub fn parse(url: &str) -> Result<Self> {
        let url = url.trim();
        let invalid = || Error::InvalidRepositoryUrl(url.to_string());

        let path = match SCHEMES.iter().find_map(|scheme| url.strip_prefix(*scheme)) {
            Some(rest) => {
                let (authority, path) = rest.split_once('/').ok_or_else(invalid)?;
                if host_of(authority).is_none() {
                    return Err(invalid());
                }
                path
            }
            None => {
                let (authority, path) = url.split_once(':').ok_or_else(invalid)?;
                if authority.contains('/') || host_of(authority).is_none() {
                    return Err(invalid());
                }
                path.strip_prefix('/').unwrap_or(path)
            }
        };

        let path = path.strip_suffix('/').unwrap_or(path);
        let (owner, repo) = path.split_once('/').ok_or_else(invalid)?;
        let name = repo.strip_suffix(".git").unwrap_or(repo);

        if !is_segment(owner) || !is_segment(name) {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    /// API path prefix for this repository: `repos/{owner}/{name}`
    pub fn api_path(&self) -> String {
        format!("repos/{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepositorySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl std::str::FromStr for RepositorySlug {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Host part of `[user@]host[:port]`, `None` if empty
fn host_of(authority: &str) -> Option<&str> {
    let host = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host);
    let host = host.split_once(':').map_or(host, |(host, _)| host);
    (!host.is_empty()).then_some(host)
}

#[inline]
fn is_segment(s: &str) -> bool {
    !s.is_empty() && !s.contains(['/', ':'])
}
