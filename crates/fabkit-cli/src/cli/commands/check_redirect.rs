//! check-redirect command: validate a redirect target against the safe-host list.

use anyhow::Result;
use fabkit_core::config::FabkitConfig;
use fabkit_core::redirect::SafeRedirect;

/// Print `safe`/`unsafe` and the URL a redirect to `url` would actually use.
pub fn run_check_redirect(
    cfg: &FabkitConfig,
    url: &str,
    host_url: Option<&str>,
    allow: Vec<String>,
) -> Result<()> {
    let mut cfg = cfg.clone();
    if !allow.is_empty() {
        cfg.safe_redirect_hosts = allow;
    }
    let guard = SafeRedirect::from_config(&cfg, host_url);
    tracing::info!(
        "check-redirect url={:?} request_host={:?} patterns={:?}",
        url,
        guard.request_host(),
        guard.safe_hosts()
    );

    let verdict = if guard.is_safe(url) { "safe" } else { "unsafe" };
    println!("{}\t{}", verdict, guard.resolve(url));
    Ok(())
}
