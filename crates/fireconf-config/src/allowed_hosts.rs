use std::fmt;

use crate::env::EnvSource;
use crate::keys;

/// A single `ALLOWED_HOSTS` entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HostPattern {
    /// Matches one host exactly.
    Exact(String),
    /// `*.domain`: matches `domain` itself and any subdomain of it, at any depth.
    Wildcard(String),
}

impl HostPattern {
    /// Builds a pattern from an already trimmed, lower-cased entry.
    pub fn new(entry: &str) -> Self {
        match entry.strip_prefix("*.") {
            Some(domain) => Self::Wildcard(domain.to_string()),
            None => Self::Exact(entry.to_string()),
        }
    }

    /// `host` must already be lower-cased.
    pub fn matches(&self, host: &str) -> bool {
        match self {
            Self::Exact(exact) => host == exact,
            Self::Wildcard(domain) => {
                host == domain
                    || host
                        .strip_suffix(domain.as_str())
                        .is_some_and(|prefix| prefix.ends_with('.'))
            }
        }
    }
}

impl fmt::Display for HostPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(exact) => f.write_str(exact),
            Self::Wildcard(domain) => write!(f, "*.{domain}"),
        }
    }
}

/// The parsed `ALLOWED_HOSTS` allowlist.
///
/// An empty allowlist rejects every host.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllowedHosts {
    patterns: Vec<HostPattern>,
}

impl AllowedHosts {
    /// Splits on commas, trims and lower-cases each entry and drops empty ones.
    pub fn parse(raw: &str) -> Self {
        let patterns = raw
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .map(|s| HostPattern::new(&s))
            .collect();

        Self { patterns }
    }

    pub fn from_source(env: &dyn EnvSource) -> Self {
        env.get(keys::ALLOWED_HOSTS)
            .map(|raw| Self::parse(&raw))
            .unwrap_or_default()
    }

    pub fn patterns(&self) -> &[HostPattern] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn is_allowed(&self, host: &str) -> bool {
        let host = host.to_lowercase();
        self.patterns.iter().any(|p| p.matches(&host))
    }
}
