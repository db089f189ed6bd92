//! Tests for gettext and lazy formatter strings.

use super::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

fn vars(pairs: &[(&str, &str)]) -> Variables {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn german() -> Catalog {
    let mut c = Catalog::new("de");
    c.insert("Hello World", "Hallo Welt");
    c.insert("Hello World!", "Hallo Welt!");
    c.insert("Hi %(name)s", "Hallo %(name)s");
    c
}

#[test]
fn gettext_without_variables_returns_translation() {
    assert_eq!(gettext(&german(), "Hello World", &Variables::new()), "Hallo Welt");
    assert_eq!(gettext(&NullTranslator, "Hello World", &Variables::new()), "Hello World");
}

#[test]
fn gettext_without_variables_leaves_percent_alone() {
    assert_eq!(gettext(&NullTranslator, "100%% %(x)s", &Variables::new()), "100%% %(x)s");
}

#[test]
fn gettext_with_variables_interpolates_translation() {
    assert_eq!(
        gettext(&german(), "Hi %(name)s", &vars(&[("name", "Ada")])),
        "Hallo Ada"
    );
}

#[test]
fn closures_are_translators() {
    let upper = |s: &str| s.to_uppercase();
    assert_eq!(gettext(&upper, "abc", &Variables::new()), "ABC");
}

#[test]
fn construction_invokes_nothing() {
    let formatter_called = Arc::new(AtomicBool::new(false));
    let translator_called = Arc::new(AtomicBool::new(false));

    let fc = formatter_called.clone();
    let tc = translator_called.clone();
    let lazy = lazy_formatter_gettext(
        "Hi",
        move |s: &str| {
            fc.store(true, Ordering::SeqCst);
            s.to_string()
        },
        Variables::new(),
        Arc::new(move |s: &str| {
            tc.store(true, Ordering::SeqCst);
            s.to_string()
        }),
    );

    assert!(!formatter_called.load(Ordering::SeqCst));
    assert!(!translator_called.load(Ordering::SeqCst));
    assert_eq!(lazy.template(), "Hi");

    assert_eq!(lazy.to_string(), "Hi");
    assert!(formatter_called.load(Ordering::SeqCst));
    assert!(translator_called.load(Ordering::SeqCst));
}

#[test]
fn render_runs_formatter_then_translation() {
    let calls = Arc::new(Mutex::new(Vec::<String>::new()));

    let fc = calls.clone();
    let tc = calls.clone();
    let lazy = lazy_formatter_gettext(
        "Hello World",
        move |s: &str| {
            fc.lock().unwrap().push(format!("format:{s}"));
            format!("{s}!")
        },
        Variables::new(),
        Arc::new(move |s: &str| {
            tc.lock().unwrap().push(format!("translate:{s}"));
            german().gettext(s)
        }),
    );

    assert_eq!(lazy.force(), "Hallo Welt!");
    assert_eq!(
        *calls.lock().unwrap(),
        vec!["format:Hello World".to_string(), "translate:Hello World!".to_string()]
    );
}

#[test]
fn formatter_sees_state_at_render_time() {
    let conditional = Arc::new(AtomicBool::new(false));
    let flag = conditional.clone();
    let lazy = lazy_formatter_gettext(
        "Hello World",
        move |s: &str| {
            if flag.load(Ordering::SeqCst) {
                format!("{s} . Condition key is on")
            } else {
                s.to_string()
            }
        },
        Variables::new(),
        Arc::new(NullTranslator),
    );

    assert_eq!(lazy.to_string(), "Hello World");
    conditional.store(true, Ordering::SeqCst);
    assert_eq!(lazy.to_string(), "Hello World . Condition key is on");
}

#[test]
fn lazy_string_substitutes_variables() {
    let lazy = lazy_formatter_gettext(
        "Hi %(name)s",
        |s: &str| s.to_string(),
        vars(&[("name", "Grace")]),
        Arc::new(german()),
    );
    assert_eq!(format!("<{lazy}>"), "<Hallo Grace>");
    assert_eq!(lazy.variables().get("name").map(String::as_str), Some("Grace"));
}

#[test]
fn debug_does_not_render() {
    let rendered = Arc::new(AtomicBool::new(false));
    let r = rendered.clone();
    let lazy = lazy_formatter_gettext(
        "x",
        move |s: &str| {
            r.store(true, Ordering::SeqCst);
            s.to_string()
        },
        Variables::new(),
        Arc::new(NullTranslator),
    );
    let dbg = format!("{lazy:?}");
    assert!(dbg.contains("LazyString"));
    assert!(!rendered.load(Ordering::SeqCst));
}
