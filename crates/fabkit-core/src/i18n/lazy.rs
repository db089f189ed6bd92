//! Deferred translation strings.

use std::fmt;
use std::sync::Arc;

use super::{gettext, Translator, Variables};

type Formatter = dyn Fn(&str) -> String + Send + Sync;

/// A translatable string whose formatter and catalog lookup run only when it
/// is rendered.
///
/// Every render re-runs both steps, so a formatter reading configuration sees
/// the value current at render time.
#[derive(Clone)]
pub struct LazyString {
    template: String,
    formatter: Arc<Formatter>,
    variables: Variables,
    translator: Arc<dyn Translator + Send + Sync>,
}

impl LazyString {
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Renders now: formatter first, then translation and interpolation.
    pub fn force(&self) -> String {
        let formatted = (self.formatter)(&self.template);
        gettext(self.translator.as_ref(), &formatted, &self.variables)
    }
}

impl fmt::Display for LazyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.force())
    }
}

impl fmt::Debug for LazyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyString")
            .field("template", &self.template)
            .field("variables", &self.variables)
            .finish_non_exhaustive()
    }
}

/// Wraps `string` so that, when rendered, `lazy_formatter` transforms it and the
/// result is translated by `translator` with `variables` substituted.
///
/// Nothing is called here.
pub fn lazy_formatter_gettext<F>(
    string: impl Into<String>,
    lazy_formatter: F,
    variables: Variables,
    translator: Arc<dyn Translator + Send + Sync>,
) -> LazyString
where
    F: Fn(&str) -> String + Send + Sync + 'static,
{
    LazyString {
        template: string.into(),
        formatter: Arc::new(lazy_formatter),
        variables,
        translator,
    }
}
