use std::cell::Cell;

use log::{error, info};
use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::{js_sys, window};

use crate::config::Links;
use crate::theme::ThemeManager;

/// Window property the latest check results are published under, for
/// inspection from the devtools console or external tooling.
pub const CHECK_SLOT: &str = "__DRIFTLINE_CHECKS__";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub pass: bool,
    pub info: String,
}

/// Read-only view of the committed page, just enough for the checks.
/// `None` means the marker in question was not rendered.
pub trait RenderedPage {
    fn cta_href(&self) -> Option<String>;
    fn embed_src(&self) -> Option<String>;
    fn dark_class(&self) -> Option<bool>;
}

/// Receives each finished check run. Injected so tests can collect results
/// without a browser global.
pub trait CheckSink {
    fn publish(&self, results: &[CheckResult]);
}

pub struct DomPage;

impl DomPage {
    fn query(selector: &str) -> Option<web_sys::Element> {
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(selector).ok())
            .flatten()
    }
}

impl RenderedPage for DomPage {
    fn cta_href(&self) -> Option<String> {
        Self::query("[data-testid='cta-youtube']").and_then(|el| el.get_attribute("href"))
    }

    fn embed_src(&self) -> Option<String> {
        Self::query("[data-testid='featured-iframe']").and_then(|el| el.get_attribute("src"))
    }

    fn dark_class(&self) -> Option<bool> {
        Self::query("[data-testid='theme-wrapper']").map(|el| el.class_list().contains("dark"))
    }
}

/// Publishes to `window[CHECK_SLOT]`, overwriting the previous run. Write
/// failures are dropped; the report lines still go out.
pub struct WindowSink;

impl CheckSink for WindowSink {
    fn publish(&self, results: &[CheckResult]) {
        if let (Some(window), Ok(value)) = (window(), serde_wasm_bindgen::to_value(results)) {
            let _ = js_sys::Reflect::set(&window, &JsValue::from_str(CHECK_SLOT), &value);
        }
    }
}

/// Runs the consistency checks against the rendered page and reports the
/// outcome. Publishes to the sink before logging so a dead log channel
/// cannot lose the results. Never panics; each check is total.
pub fn run_checks(
    page: &dyn RenderedPage,
    links: &Links,
    themes: &ThemeManager,
    sink: &dyn CheckSink,
) -> Vec<CheckResult> {
    let mut results = Vec::with_capacity(3);

    let cta = page.cta_href();
    results.push(CheckResult {
        name: "CTA links to the YouTube channel".to_string(),
        pass: cta.as_deref() == Some(links.youtube_channel),
        info: cta.unwrap_or_else(|| "missing".to_string()),
    });

    let expected = links.latest_video_id.trim();
    let embed = page.embed_src();
    let (pass, info) = match (&embed, expected.is_empty()) {
        (Some(src), false) => (src.contains(expected), src.clone()),
        (Some(src), true) => (false, src.clone()),
        (None, true) => (true, "no embed rendered".to_string()),
        (None, false) => (false, "missing".to_string()),
    };
    results.push(CheckResult {
        name: "Featured embed uses the configured video id".to_string(),
        pass,
        info,
    });

    // One toggle must flip the wrapper's dark class; the second one puts the
    // page back the way it was and is not itself evaluated.
    let before = page.dark_class();
    themes.toggle();
    let after = page.dark_class();
    themes.toggle();
    let show = |value: Option<bool>| match value {
        Some(flag) => flag.to_string(),
        None => "missing".to_string(),
    };
    results.push(CheckResult {
        name: "Theme toggle flips the dark class".to_string(),
        pass: matches!((before, after), (Some(b), Some(a)) if b != a),
        info: format!("{} -> {}", show(before), show(after)),
    });

    let passed = results.iter().filter(|result| result.pass).count();
    sink.publish(&results);
    info!("driftline self-checks: {}/{} passed", passed, results.len());
    for result in &results {
        if result.pass {
            info!("✔ {}: {}", result.name, result.info);
        } else {
            error!("✖ {}: {}", result.name, result.info);
        }
    }

    results
}

thread_local! {
    static CHECKS_RAN: Cell<bool> = Cell::new(false);
}

/// Runs the checks at most once per page load; later calls are ignored.
pub fn run_startup_checks(
    page: &dyn RenderedPage,
    links: &Links,
    themes: &ThemeManager,
    sink: &dyn CheckSink,
) {
    if CHECKS_RAN.with(|ran| ran.replace(true)) {
        return;
    }
    run_checks(page, links, themes, sink);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{PreferenceStore, Theme, ThemeSurface};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// In-memory stand-in for the rendered page. Doubles as the theme
    /// surface: applying a theme flips the wrapper flag, when the wrapper
    /// exists at all.
    #[derive(Default)]
    struct FakePage {
        cta: Option<String>,
        embed: Option<String>,
        dark: Cell<Option<bool>>,
    }

    impl RenderedPage for FakePage {
        fn cta_href(&self) -> Option<String> {
            self.cta.clone()
        }

        fn embed_src(&self) -> Option<String> {
            self.embed.clone()
        }

        fn dark_class(&self) -> Option<bool> {
            self.dark.get()
        }
    }

    impl ThemeSurface for FakePage {
        fn apply(&self, theme: Theme) {
            if self.dark.get().is_some() {
                self.dark.set(Some(theme.is_dark()));
            }
        }
    }

    struct NullStore;

    impl PreferenceStore for NullStore {
        fn get(&self) -> Option<String> {
            None
        }

        fn set(&self, _value: &str) {}
    }

    #[derive(Default)]
    struct RecordingSink {
        published: RefCell<Vec<Vec<CheckResult>>>,
    }

    impl CheckSink for RecordingSink {
        fn publish(&self, results: &[CheckResult]) {
            self.published.borrow_mut().push(results.to_vec());
        }
    }

    fn demo_links(video_id: &'static str) -> Links {
        Links {
            youtube_channel: "https://example.com/channel",
            latest_video_id: video_id,
            email: "hello@example.com",
            instagram: "https://instagram.com/example",
            twitter: "https://twitter.com/example",
            newsletter_action: "#",
        }
    }

    fn rendered_page(cta: &str, embed: Option<&str>, dark: Option<bool>) -> Rc<FakePage> {
        Rc::new(FakePage {
            cta: Some(cta.to_string()),
            embed: embed.map(str::to_string),
            dark: Cell::new(dark),
        })
    }

    fn manager_on(page: &Rc<FakePage>, initial: Theme) -> ThemeManager {
        ThemeManager::new(initial, Rc::new(NullStore), page.clone())
    }

    #[test]
    fn a_consistent_page_passes_every_check() {
        let page = rendered_page(
            "https://example.com/channel",
            Some("https://www.youtube.com/embed/abc123"),
            Some(false),
        );
        let themes = manager_on(&page, Theme::Light);
        let sink = RecordingSink::default();

        let results = run_checks(&*page, &demo_links("abc123"), &themes, &sink);

        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|result| result.pass));
        assert_eq!(sink.published.borrow().len(), 1);
        assert_eq!(sink.published.borrow()[0], results);
        // The restoring toggle leaves the page and the manager unchanged.
        assert_eq!(page.dark.get(), Some(false));
        assert_eq!(themes.current(), Theme::Light);
    }

    #[test]
    fn cta_must_match_the_channel_exactly() {
        let page = rendered_page("https://example.com/other", None, Some(false));
        let themes = manager_on(&page, Theme::Light);

        let results = run_checks(&*page, &demo_links(""), &themes, &RecordingSink::default());

        assert!(!results[0].pass);
        assert_eq!(results[0].info, "https://example.com/other");
    }

    #[test]
    fn a_missing_cta_fails_with_a_missing_marker() {
        let page = Rc::new(FakePage {
            cta: None,
            embed: None,
            dark: Cell::new(Some(false)),
        });
        let themes = manager_on(&page, Theme::Light);

        let results = run_checks(&*page, &demo_links(""), &themes, &RecordingSink::default());

        assert!(!results[0].pass);
        assert_eq!(results[0].info, "missing");
    }

    #[test]
    fn embed_passes_when_the_src_contains_the_id() {
        let page = rendered_page(
            "https://example.com/channel",
            Some("https://host/embed/abc123"),
            Some(false),
        );
        let themes = manager_on(&page, Theme::Light);

        let results = run_checks(&*page, &demo_links("abc123"), &themes, &RecordingSink::default());

        assert!(results[1].pass);
    }

    #[test]
    fn embed_fails_on_an_id_mismatch() {
        let page = rendered_page(
            "https://example.com/channel",
            Some("https://host/embed/xyz999"),
            Some(false),
        );
        let themes = manager_on(&page, Theme::Light);

        let results = run_checks(&*page, &demo_links("abc123"), &themes, &RecordingSink::default());

        assert!(!results[1].pass);
        assert_eq!(results[1].info, "https://host/embed/xyz999");
    }

    #[test]
    fn no_id_requires_no_embed_at_all() {
        let bare = rendered_page("https://example.com/channel", None, Some(false));
        let themes = manager_on(&bare, Theme::Light);
        let results = run_checks(&*bare, &demo_links(""), &themes, &RecordingSink::default());
        assert!(results[1].pass);
        assert_eq!(results[1].info, "no embed rendered");

        let stray = rendered_page(
            "https://example.com/channel",
            Some("https://host/embed/abc123"),
            Some(false),
        );
        let themes = manager_on(&stray, Theme::Light);
        let results = run_checks(&*stray, &demo_links(""), &themes, &RecordingSink::default());
        assert!(!results[1].pass);
    }

    #[test]
    fn a_configured_id_with_no_embed_fails() {
        let page = rendered_page("https://example.com/channel", None, Some(false));
        let themes = manager_on(&page, Theme::Light);

        let results = run_checks(&*page, &demo_links("abc123"), &themes, &RecordingSink::default());

        assert!(!results[1].pass);
        assert_eq!(results[1].info, "missing");
    }

    #[test]
    fn a_whitespace_id_counts_as_unconfigured() {
        let page = rendered_page("https://example.com/channel", None, Some(false));
        let themes = manager_on(&page, Theme::Light);

        let results = run_checks(&*page, &demo_links("   "), &themes, &RecordingSink::default());

        assert!(results[1].pass);
    }

    #[test]
    fn the_toggle_check_flips_and_restores_the_wrapper() {
        let page = rendered_page("https://example.com/channel", None, Some(false));
        let themes = manager_on(&page, Theme::Light);

        let results = run_checks(&*page, &demo_links(""), &themes, &RecordingSink::default());

        assert!(results[2].pass);
        assert_eq!(results[2].info, "false -> true");
        assert_eq!(page.dark.get(), Some(false));
        assert_eq!(themes.current(), Theme::Light);
    }

    #[test]
    fn a_missing_wrapper_fails_the_toggle_check() {
        let page = rendered_page("https://example.com/channel", None, None);
        let themes = manager_on(&page, Theme::Light);

        let results = run_checks(&*page, &demo_links(""), &themes, &RecordingSink::default());

        assert!(!results[2].pass);
        assert_eq!(results[2].info, "missing -> missing");
        assert_eq!(themes.current(), Theme::Light);
    }

    #[test]
    fn every_configuration_publishes_exactly_three_results() {
        for (id, embed) in [
            ("", None),
            ("", Some("https://host/embed/abc123")),
            ("abc123", None),
            ("abc123", Some("https://host/embed/abc123")),
        ] {
            let page = rendered_page("https://example.com/channel", embed, Some(false));
            let themes = manager_on(&page, Theme::Light);
            let sink = RecordingSink::default();

            run_checks(&*page, &demo_links(id), &themes, &sink);

            let published = sink.published.borrow();
            assert_eq!(published.len(), 1);
            assert_eq!(published[0].len(), 3);
        }
    }

    #[test]
    fn startup_checks_run_only_once() {
        let page = rendered_page("https://example.com/channel", None, Some(false));
        let themes = manager_on(&page, Theme::Light);
        let sink = RecordingSink::default();

        run_startup_checks(&*page, &demo_links(""), &themes, &sink);
        run_startup_checks(&*page, &demo_links(""), &themes, &sink);

        assert_eq!(sink.published.borrow().len(), 1);
    }

    #[test]
    fn results_serialize_with_the_slot_field_names() {
        let result = CheckResult {
            name: "example".to_string(),
            pass: true,
            info: "ok".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({"name": "example", "pass": true, "info": "ok"})
        );
    }
}
