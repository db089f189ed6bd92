//! Redirect target validation.
//!
//! A redirect target is accepted when it is relative, or when its host matches
//! one of the safe-host glob patterns and its scheme is http or https. With no
//! patterns configured, only the current request's own host is safe.

mod category;
mod glob;
mod split;

pub use category::is_other_category;
pub use glob::fnmatch;
pub use split::{split_url, SplitError, SplitUrl};

use crate::config::FabkitConfig;

const VALID_SCHEMES: [&str; 2] = ["http", "https"];

/// Decides whether `url` is safe to redirect to.
///
/// `safe_hosts` are glob patterns matched against the URL's netloc; when empty,
/// `request_host` (netloc form, e.g. `localhost:5000`) is the only allowed host.
/// Empty input is unsafe.
///
/// Stricter than a plain `urlsplit` reading in one respect: a backslash counts as
/// a slash in the `//` authority marker, and an empty authority followed by a
/// slash is refused. So `/\evil.com` is checked as host `evil.com`, and
/// `/\/evil.com` is rejected, where `urlsplit` would treat both as relative paths.
/// Browsers resolve both off-site.
pub fn is_safe_redirect_url<S: AsRef<str>>(url: &str, safe_hosts: &[S], request_host: &str) -> bool {
    let first = match url.chars().next() {
        Some(c) => c,
        None => return false,
    };
    if url.starts_with("///") {
        return false;
    }
    let parts = match split_url(url) {
        Ok(parts) => parts,
        Err(e) => {
            tracing::debug!("rejecting redirect target: {}", e);
            return false;
        }
    };
    if parts.netloc.is_empty() && !parts.scheme.is_empty() {
        return false;
    }
    if is_other_category(first) {
        return false;
    }

    let scheme = if parts.scheme.is_empty() && !parts.netloc.is_empty() {
        "http"
    } else {
        parts.scheme.as_str()
    };

    let host_allowed = parts.netloc.is_empty()
        || if safe_hosts.is_empty() {
            fnmatch(&parts.netloc, request_host)
        } else {
            safe_hosts
                .iter()
                .any(|pattern| fnmatch(&parts.netloc, pattern.as_ref()))
        };

    host_allowed && (scheme.is_empty() || VALID_SCHEMES.contains(&scheme))
}

/// Returns `url` when it is non-empty and safe, otherwise logs a warning and
/// returns `index_url`.
pub fn get_safe_redirect<'a, S: AsRef<str>>(
    url: &'a str,
    safe_hosts: &[S],
    request_host: &str,
    index_url: &'a str,
) -> &'a str {
    if !url.is_empty() && is_safe_redirect_url(url, safe_hosts, request_host) {
        return url;
    }
    tracing::warn!("Invalid redirect detected, falling back to index");
    index_url
}

/// Netloc of the request's host URL as written, e.g. `http://localhost:5000/`
/// gives `localhost:5000`. Case and explicit ports are kept so it compares
/// like-for-like with redirect netlocs.
pub fn request_host_from_url(host_url: &str) -> Option<String> {
    let parts = split_url(host_url).ok()?;
    (!parts.netloc.is_empty()).then_some(parts.netloc)
}

/// Allowlist, request host and index URL bundled for repeated checks within one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeRedirect {
    safe_hosts: Vec<String>,
    request_host: String,
    index_url: String,
}

impl SafeRedirect {
    pub fn new(
        safe_hosts: Vec<String>,
        request_host: impl Into<String>,
        index_url: impl Into<String>,
    ) -> Self {
        Self {
            safe_hosts,
            request_host: request_host.into(),
            index_url: index_url.into(),
        }
    }

    /// Builds from config. `request_host_url` (the live request's host URL) takes
    /// precedence over `cfg.host_url`; with neither, only relative targets pass
    /// unless patterns are configured.
    pub fn from_config(cfg: &FabkitConfig, request_host_url: Option<&str>) -> Self {
        let host_url = request_host_url.or(cfg.host_url.as_deref());
        let request_host = host_url.and_then(request_host_from_url).unwrap_or_default();
        if request_host.is_empty() && cfg.safe_redirect_hosts.is_empty() {
            tracing::debug!("no request host and no safe hosts; absolute redirects will be refused");
        }
        Self::new(
            cfg.safe_redirect_hosts.clone(),
            request_host,
            cfg.index_url.clone(),
        )
    }

    pub fn safe_hosts(&self) -> &[String] {
        &self.safe_hosts
    }

    pub fn request_host(&self) -> &str {
        &self.request_host
    }

    pub fn index_url(&self) -> &str {
        &self.index_url
    }

    pub fn is_safe(&self, url: &str) -> bool {
        is_safe_redirect_url(url, &self.safe_hosts, &self.request_host)
    }

    pub fn resolve<'a>(&'a self, url: &'a str) -> &'a str {
        get_safe_redirect(url, &self.safe_hosts, &self.request_host, &self.index_url)
    }
}
