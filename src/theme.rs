use std::cell::Cell;
use std::rc::Rc;

use web_sys::window;

/// localStorage slot holding the saved theme, always the literal string
/// `"light"` or `"dark"`.
pub const THEME_KEY: &str = "driftline-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Accepts only the exact stored literals; anything else reads as unset.
    pub fn from_str(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn flipped(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }
}

/// Durable slot for the saved theme. Implementations must not fail: a broken
/// or absent backing store reads as `None` and drops writes.
pub trait PreferenceStore {
    fn get(&self) -> Option<String>;
    fn set(&self, value: &str);
}

/// Environment hint for the preferred color scheme. Unknown reads as `false`.
pub trait ColorSchemeSignal {
    fn prefers_dark(&self) -> bool;
}

/// Where the active theme becomes visible. The browser implementation flips
/// the `dark` class on the page wrapper.
pub trait ThemeSurface {
    fn apply(&self, theme: Theme);
}

pub struct BrowserPrefs;

impl PreferenceStore for BrowserPrefs {
    fn get(&self) -> Option<String> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(THEME_KEY).ok())
            .flatten()
    }

    fn set(&self, value: &str) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok()).flatten() {
            let _ = storage.set_item(THEME_KEY, value);
        }
    }
}

pub struct MediaQueryScheme;

impl ColorSchemeSignal for MediaQueryScheme {
    fn prefers_dark(&self) -> bool {
        window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false)
    }
}

pub struct DomThemeSurface;

impl ThemeSurface for DomThemeSurface {
    fn apply(&self, theme: Theme) {
        let wrapper = window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector("[data-testid='theme-wrapper']").ok())
            .flatten();
        if let Some(wrapper) = wrapper {
            let classes = wrapper.class_list();
            if theme.is_dark() {
                let _ = classes.add_1("dark");
            } else {
                let _ = classes.remove_1("dark");
            }
        }
    }
}

/// Resolve the theme to start with: a valid saved value wins, then the
/// ambient dark-scheme signal, then light. Pure read, cannot fail.
pub fn resolve_initial_theme(
    store: &dyn PreferenceStore,
    scheme: &dyn ColorSchemeSignal,
) -> Theme {
    if let Some(saved) = store.get().and_then(|value| Theme::from_str(&value)) {
        return saved;
    }
    if scheme.prefers_dark() {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Holds the active theme and writes every change through to the store and
/// the surface. Persistence is best effort; the in-memory theme always wins.
pub struct ThemeManager {
    current: Cell<Theme>,
    store: Rc<dyn PreferenceStore>,
    surface: Rc<dyn ThemeSurface>,
}

impl ThemeManager {
    pub fn new(
        initial: Theme,
        store: Rc<dyn PreferenceStore>,
        surface: Rc<dyn ThemeSurface>,
    ) -> Self {
        Self {
            current: Cell::new(initial),
            store,
            surface,
        }
    }

    pub fn current(&self) -> Theme {
        self.current.get()
    }

    pub fn set(&self, next: Theme) {
        self.current.set(next);
        self.surface.apply(next);
        self.store.set(next.as_str());
    }

    pub fn toggle(&self) -> Theme {
        let next = self.current().flipped();
        self.set(next);
        next
    }
}
