//! Translation lookups and deferred, formatter-wrapped translation strings.
//!
//! [`Translator`] is the seam to whatever message catalog the host application
//! uses. [`gettext`] performs lookup plus `%(name)s` interpolation, and
//! [`lazy_formatter_gettext`] defers both (and a caller-supplied formatter) until
//! the string is rendered.

mod catalog;
mod format;
mod lazy;

pub use catalog::{Catalog, CatalogError};
pub use format::{interpolate, Variables};
pub use lazy::{lazy_formatter_gettext, LazyString};

/// Looks up the translation of a message id.
pub trait Translator {
    /// Returns the translation of `msgid`, or `msgid` itself when there is none.
    fn gettext(&self, msgid: &str) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str) -> String,
{
    fn gettext(&self, msgid: &str) -> String {
        self(msgid)
    }
}

/// Identity translator.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTranslator;

impl Translator for NullTranslator {
    fn gettext(&self, msgid: &str) -> String {
        msgid.to_string()
    }
}

/// Translates `msgid` and, when `variables` is non-empty, substitutes them.
pub fn gettext<T>(translator: &T, msgid: &str, variables: &Variables) -> String
where
    T: Translator + ?Sized,
{
    let translated = translator.gettext(msgid);
    if variables.is_empty() {
        translated
    } else {
        interpolate(&translated, variables)
    }
}

#[cfg(test)]
mod tests;
