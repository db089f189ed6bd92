//! translate command: render a message through a catalog via a lazy string.

use anyhow::{Context, Result};
use fabkit_core::config::FabkitConfig;
use fabkit_core::i18n::{lazy_formatter_gettext, Catalog, NullTranslator, Translator, Variables};
use std::path::Path;
use std::sync::Arc;

/// Render `msgid`, appending `suffix` before lookup, and print the result.
pub fn run_translate(
    cfg: &FabkitConfig,
    msgid: &str,
    vars: Vec<(String, String)>,
    suffix: Option<String>,
    catalog: Option<&Path>,
) -> Result<()> {
    let translator: Arc<dyn Translator + Send + Sync> = match catalog.or(cfg.catalog.as_deref()) {
        Some(path) => Arc::new(
            Catalog::load(path).with_context(|| format!("loading catalog {}", path.display()))?,
        ),
        None => Arc::new(NullTranslator),
    };

    let variables: Variables = vars.into_iter().collect();
    let suffix = suffix.unwrap_or_default();
    let message = lazy_formatter_gettext(
        msgid,
        move |s: &str| format!("{s}{suffix}"),
        variables,
        translator,
    );

    println!("{}", message);
    Ok(())
}
