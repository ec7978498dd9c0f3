use chrono::{Datelike, Local};
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use web_sys::window;
use yew::prelude::*;

use crate::components::embed::AspectFrame;
use crate::config::LINKS;
use crate::selfcheck::{self, DomPage, WindowSink};
use crate::theme::{
    resolve_initial_theme, BrowserPrefs, DomThemeSurface, MediaQueryScheme, ThemeManager,
};

const PAGE_CSS: &str = r#"
    * {
        box-sizing: border-box;
    }

    body {
        margin: 0;
    }

    .page {
        --bg: #f6f3ec;
        --bg-accent: #e9f0ec;
        --panel: #ffffff;
        --panel-soft: rgba(255, 255, 255, 0.72);
        --ink: #1d2a2e;
        --muted: #5a6b70;
        --line: #d9d4c7;
        --accent: #0e7c66;
        --accent-strong: #0a5c4c;
        --cta: #c96f1e;
        --cta-strong: #a85812;
        --thumb-a: #bcd8cd;
        --thumb-b: #dfe8e3;
        min-height: 100vh;
        background: linear-gradient(165deg, var(--bg) 0%, var(--bg-accent) 100%);
        color: var(--ink);
        font-family: 'Segoe UI', system-ui, -apple-system, sans-serif;
        line-height: 1.6;
        transition: background 0.25s ease, color 0.25s ease;
    }

    .page.dark {
        --bg: #0f1518;
        --bg-accent: #16222a;
        --panel: #1a262c;
        --panel-soft: rgba(20, 31, 36, 0.78);
        --ink: #e8eeee;
        --muted: #93a6ab;
        --line: #2b3b42;
        --accent: #3dbfa1;
        --accent-strong: #67d4bb;
        --cta: #e08a33;
        --cta-strong: #f0a45a;
        --thumb-a: #1e3a38;
        --thumb-b: #24303a;
    }

    .page a {
        color: inherit;
        text-decoration: none;
    }

    .site-header {
        position: sticky;
        top: 0;
        z-index: 10;
        backdrop-filter: blur(10px);
        background: var(--panel-soft);
        border-bottom: 1px solid var(--line);
    }

    .header-inner {
        max-width: 1080px;
        margin: 0 auto;
        padding: 0.75rem 1.5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 1rem;
    }

    .brand {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }

    .brand-mark {
        width: 2.4rem;
        height: 2.4rem;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        font-weight: 700;
        font-size: 0.85rem;
        letter-spacing: 0.05em;
        color: #fff;
        background: linear-gradient(145deg, var(--accent), var(--accent-strong));
    }

    .brand-name {
        font-weight: 700;
        letter-spacing: 0.12em;
        font-size: 0.95rem;
    }

    .brand-tag {
        font-size: 0.72rem;
        color: var(--muted);
        letter-spacing: 0.04em;
    }

    .header-nav {
        display: none;
        gap: 1.25rem;
        font-size: 0.9rem;
    }

    .nav-link {
        color: var(--muted);
        transition: color 0.15s ease;
    }

    .nav-link:hover {
        color: var(--ink);
    }

    .header-actions {
        display: flex;
        align-items: center;
        gap: 0.6rem;
    }

    .theme-toggle {
        border: 1px solid var(--line);
        background: var(--panel);
        color: var(--ink);
        border-radius: 999px;
        padding: 0.4rem 0.9rem;
        font-size: 0.82rem;
        cursor: pointer;
        transition: border-color 0.15s ease;
    }

    .theme-toggle:hover {
        border-color: var(--accent);
    }

    .cta-button {
        background: var(--cta);
        color: #fff;
        border-radius: 999px;
        padding: 0.45rem 1.1rem;
        font-size: 0.85rem;
        font-weight: 600;
        white-space: nowrap;
        transition: background 0.15s ease;
    }

    .cta-button:hover {
        background: var(--cta-strong);
    }

    .hero {
        padding: 4rem 1.5rem 3rem;
    }

    .hero-inner {
        max-width: 1080px;
        margin: 0 auto;
        display: grid;
        grid-template-columns: 1fr;
        gap: 2.5rem;
        align-items: center;
    }

    .hero-title {
        font-size: 2.4rem;
        line-height: 1.15;
        margin: 0 0 1rem;
        letter-spacing: -0.02em;
    }

    .hero-lede {
        color: var(--muted);
        font-size: 1.05rem;
        margin: 0 0 1.75rem;
        max-width: 34rem;
    }

    .hero-actions {
        display: flex;
        flex-wrap: wrap;
        gap: 0.75rem;
    }

    .action-primary {
        background: var(--accent);
        color: #fff;
        border-radius: 999px;
        padding: 0.65rem 1.5rem;
        font-weight: 600;
        transition: background 0.15s ease;
    }

    .action-primary:hover {
        background: var(--accent-strong);
    }

    .action-secondary {
        border: 1px solid var(--line);
        border-radius: 999px;
        padding: 0.65rem 1.5rem;
        color: var(--muted);
        transition: color 0.15s ease, border-color 0.15s ease;
    }

    .action-secondary:hover {
        color: var(--ink);
        border-color: var(--accent);
    }

    .hero-note {
        margin-top: 1rem;
        font-size: 0.82rem;
        color: var(--muted);
        letter-spacing: 0.03em;
    }

    .hero-media {
        background: var(--panel);
        border: 1px solid var(--line);
        border-radius: 16px;
        overflow: hidden;
        box-shadow: 0 18px 40px rgba(10, 30, 30, 0.12);
    }

    .embed-frame {
        width: 100%;
        height: 100%;
        border: 0;
        display: block;
    }

    .embed-empty {
        height: 100%;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 0.4rem;
        text-align: center;
        padding: 1.5rem;
        background: linear-gradient(145deg, var(--thumb-a), var(--thumb-b));
    }

    .embed-empty-title {
        font-weight: 600;
    }

    .embed-empty-note {
        font-size: 0.85rem;
        color: var(--muted);
    }

    .section {
        max-width: 1080px;
        margin: 0 auto;
        padding: 3rem 1.5rem;
    }

    .section-title {
        font-size: 1.6rem;
        margin: 0 0 0.5rem;
        letter-spacing: -0.01em;
    }

    .section-lede {
        color: var(--muted);
        margin: 0 0 1.75rem;
        max-width: 40rem;
    }

    .watch-header {
        display: flex;
        align-items: baseline;
        justify-content: space-between;
        gap: 1rem;
        flex-wrap: wrap;
    }

    .watch-link {
        color: var(--accent);
        font-weight: 600;
        font-size: 0.9rem;
    }

    .watch-link:hover {
        color: var(--accent-strong);
    }

    .episode-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 1.25rem;
    }

    .episode-card {
        background: var(--panel);
        border: 1px solid var(--line);
        border-radius: 14px;
        overflow: hidden;
        transition: transform 0.15s ease, border-color 0.15s ease;
    }

    .episode-card:hover {
        transform: translateY(-3px);
        border-color: var(--accent);
    }

    .episode-thumb {
        height: 100%;
        background: linear-gradient(145deg, var(--thumb-a), var(--thumb-b));
        display: flex;
        align-items: center;
        justify-content: center;
        color: var(--muted);
        font-size: 2rem;
    }

    .episode-meta {
        padding: 0.9rem 1.1rem 1.1rem;
    }

    .episode-title {
        font-weight: 600;
        margin-bottom: 0.2rem;
    }

    .episode-note {
        font-size: 0.82rem;
        color: var(--muted);
    }

    .social-strip {
        border-top: 1px solid var(--line);
        border-bottom: 1px solid var(--line);
        background: var(--panel-soft);
    }

    .social-inner {
        max-width: 1080px;
        margin: 0 auto;
        padding: 1.5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 1rem;
        flex-wrap: wrap;
    }

    .social-title {
        font-size: 0.8rem;
        letter-spacing: 0.14em;
        text-transform: uppercase;
        color: var(--muted);
    }

    .social-links {
        display: flex;
        gap: 0.6rem;
    }

    .social-pill {
        border: 1px solid var(--line);
        border-radius: 999px;
        padding: 0.4rem 1rem;
        font-size: 0.85rem;
        color: var(--muted);
        transition: color 0.15s ease, border-color 0.15s ease;
    }

    .social-pill:hover {
        color: var(--ink);
        border-color: var(--accent);
    }

    .subscribe-panel {
        background: var(--panel);
        border: 1px solid var(--line);
        border-radius: 16px;
        padding: 2.5rem;
    }

    .subscribe-form {
        display: flex;
        flex-wrap: wrap;
        gap: 0.75rem;
        max-width: 32rem;
    }

    .subscribe-input {
        flex: 1 1 14rem;
        border: 1px solid var(--line);
        border-radius: 10px;
        background: var(--bg);
        color: var(--ink);
        padding: 0.7rem 1rem;
        font-size: 0.95rem;
    }

    .subscribe-input:focus {
        outline: 2px solid var(--accent);
        outline-offset: 1px;
    }

    .subscribe-button {
        background: var(--accent);
        color: #fff;
        border: 0;
        border-radius: 10px;
        padding: 0.7rem 1.4rem;
        font-size: 0.95rem;
        font-weight: 600;
        cursor: pointer;
        transition: background 0.15s ease;
    }

    .subscribe-button:hover {
        background: var(--accent-strong);
    }

    .about-body {
        color: var(--muted);
        max-width: 44rem;
    }

    .about-body p {
        margin: 0 0 1rem;
    }

    .inline-link {
        color: var(--accent);
        font-weight: 600;
    }

    .inline-link:hover {
        color: var(--accent-strong);
    }

    .contact-form {
        display: grid;
        grid-template-columns: 1fr;
        gap: 0.9rem;
        max-width: 36rem;
    }

    .field-input,
    .field-area {
        width: 100%;
        border: 1px solid var(--line);
        border-radius: 10px;
        background: var(--panel);
        color: var(--ink);
        padding: 0.7rem 1rem;
        font-size: 0.95rem;
        font-family: inherit;
    }

    .field-input:focus,
    .field-area:focus {
        outline: 2px solid var(--accent);
        outline-offset: 1px;
    }

    .field-area {
        resize: vertical;
    }

    .send-button {
        justify-self: start;
        background: var(--cta);
        color: #fff;
        border: 0;
        border-radius: 10px;
        padding: 0.7rem 1.6rem;
        font-size: 0.95rem;
        font-weight: 600;
        cursor: pointer;
        transition: background 0.15s ease;
    }

    .send-button:hover {
        background: var(--cta-strong);
    }

    .site-footer {
        border-top: 1px solid var(--line);
        padding: 1.5rem;
        font-size: 0.85rem;
        color: var(--muted);
    }

    .footer-inner {
        max-width: 1080px;
        margin: 0 auto;
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 1rem;
        flex-wrap: wrap;
    }

    .footer-links {
        display: flex;
        gap: 1.25rem;
    }

    .footer-link:hover {
        color: var(--ink);
    }

    @media (min-width: 760px) {
        .header-nav {
            display: flex;
        }

        .hero-inner {
            grid-template-columns: 1.1fr 1fr;
        }

        .episode-grid {
            grid-template-columns: repeat(3, 1fr);
        }

        .hero-title {
            font-size: 3rem;
        }
    }
"#;

#[function_component(Home)]
pub fn home() -> Html {
    let themes = use_state(|| {
        let initial = resolve_initial_theme(&BrowserPrefs, &MediaQueryScheme);
        ThemeManager::new(initial, Rc::new(BrowserPrefs), Rc::new(DomThemeSurface))
    });

    let theme = use_state(|| themes.current());

    {
        let themes = themes.clone();
        use_effect_with_deps(
            move |_| {
                // Let the browser commit the first frame before auditing it.
                Timeout::new(0, move || {
                    selfcheck::run_startup_checks(&DomPage, &LINKS, &themes, &WindowSink);
                })
                .forget();
                || ()
            },
            (),
        );
    }

    let on_toggle = {
        let themes = themes.clone();
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            theme.set(themes.toggle());
        })
    };

    let on_newsletter_submit = Callback::from(move |event: SubmitEvent| {
        if LINKS.newsletter_is_demo() {
            event.prevent_default();
            if let Some(window) = window() {
                let _ = window.alert_with_message(
                    "Point the newsletter form at your email service to enable signups.",
                );
            }
        }
    });

    let on_contact_submit = Callback::from(move |event: SubmitEvent| {
        event.prevent_default();
        if let Some(window) = window() {
            let _ = window.alert_with_message(
                "Connect this form to your email service or backend to receive messages.",
            );
        }
    });

    let is_dark = theme.is_dark();
    let toggle_hint = if is_dark {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    };
    let newsletter_action =
        (!LINKS.newsletter_is_demo()).then(|| LINKS.newsletter_action.to_string());
    let videos_url = LINKS.videos_url();
    let year = Local::now().year();

    html! {
        <div data-testid="theme-wrapper" class={classes!("page", is_dark.then(|| "dark"))}>
            <style>{PAGE_CSS}</style>

            <header class="site-header">
                <div class="header-inner">
                    <div class="brand">
                        <div class="brand-mark">{"DL"}</div>
                        <div>
                            <div class="brand-name">{"DRIFTLINE MEDIA"}</div>
                            <div class="brand-tag">{"Ocean science • Coastal culture • Sport"}</div>
                        </div>
                    </div>
                    <nav class="header-nav">
                        <a class="nav-link" href="#watch">{"Watch"}</a>
                        <a class="nav-link" href="#about">{"About"}</a>
                        <a class="nav-link" href="#subscribe">{"Subscribe"}</a>
                        <a class="nav-link" href="#contact">{"Contact"}</a>
                    </nav>
                    <div class="header-actions">
                        <button
                            data-testid="theme-toggle"
                            class="theme-toggle"
                            type="button"
                            onclick={on_toggle}
                            aria-pressed={is_dark.to_string()}
                            aria-label={toggle_hint}
                        >
                            { if is_dark { "☀ Light" } else { "☾ Dark" } }
                        </button>
                        <a
                            data-testid="cta-youtube"
                            class="cta-button"
                            href={LINKS.youtube_channel}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {"▶ Watch on YouTube"}
                        </a>
                    </div>
                </div>
            </header>

            <section class="hero">
                <div class="hero-inner">
                    <div>
                        <h1 class="hero-title">{"Stories carried in from the coast"}</h1>
                        <p class="hero-lede">
                            {"Driftline Media makes documentary podcasts and film about ocean \
                              science, coastal culture, and the people who earn their living on \
                              the water."}
                        </p>
                        <div class="hero-actions">
                            <a class="action-primary" href="#watch">{"Watch and listen"}</a>
                            <a class="action-secondary" href="#subscribe">{"Get episodes by email"}</a>
                        </div>
                        <div class="hero-note">{"New episodes every other week"}</div>
                    </div>
                    <div class="hero-media">
                        <AspectFrame>
                            {
                                match LINKS.featured_embed_src() {
                                    Some(src) => html! {
                                        <iframe
                                            data-testid="featured-iframe"
                                            class="embed-frame"
                                            src={src}
                                            title="Featured episode"
                                            frameborder="0"
                                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                                            allowfullscreen=true
                                            referrerpolicy="strict-origin-when-cross-origin"
                                            loading="lazy"
                                        />
                                    },
                                    None => html! {
                                        <div class="embed-empty">
                                            <div class="embed-empty-title">{"Featured episode goes here"}</div>
                                            <div class="embed-empty-note">
                                                {"Set latest_video_id in src/config.rs to feature a video."}
                                            </div>
                                        </div>
                                    },
                                }
                            }
                        </AspectFrame>
                    </div>
                </div>
            </section>

            <section id="watch" class="section">
                <div class="watch-header">
                    <h2 class="section-title">{"Watch the podcast"}</h2>
                    <a
                        data-testid="watch-youtube-link"
                        class="watch-link"
                        href={LINKS.youtube_channel}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"Go to the channel ↗"}
                    </a>
                </div>
                <p class="section-lede">
                    {"Full episodes, highlight cuts, and live conversations from the studio."}
                </p>
                <div class="episode-grid">
                    {
                        for (1..=3).map(|index| html! {
                            <a
                                key={index.to_string()}
                                class="episode-card"
                                href={videos_url.clone()}
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                <AspectFrame>
                                    <div class="episode-thumb">{"▶"}</div>
                                </AspectFrame>
                                <div class="episode-meta">
                                    <div class="episode-title">{ format!("Latest episode {}", index) }</div>
                                    <div class="episode-note">{"Watch on YouTube"}</div>
                                </div>
                            </a>
                        })
                    }
                </div>
            </section>

            <section class="social-strip">
                <div class="social-inner">
                    <div class="social-title">{"Elsewhere"}</div>
                    <div class="social-links">
                        <a
                            data-testid="social-x"
                            class="social-pill"
                            href={LINKS.twitter}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {"X / Twitter"}
                        </a>
                        <a
                            data-testid="social-instagram"
                            class="social-pill"
                            href={LINKS.instagram}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {"Instagram"}
                        </a>
                    </div>
                </div>
            </section>

            <section id="subscribe" class="section">
                <div class="subscribe-panel">
                    <h2 class="section-title">{"New episodes by email"}</h2>
                    <p class="section-lede">
                        {"One email when an episode drops. No noise, unsubscribe whenever."}
                    </p>
                    <form
                        class="subscribe-form"
                        method="post"
                        action={newsletter_action}
                        onsubmit={on_newsletter_submit}
                    >
                        <input
                            class="subscribe-input"
                            type="email"
                            name="email"
                            placeholder="you@example.com"
                            aria-label="Email address"
                            required=true
                        />
                        <button class="subscribe-button" type="submit">{"Subscribe"}</button>
                    </form>
                </div>
            </section>

            <section id="about" class="section">
                <h2 class="section-title">{"About the studio"}</h2>
                <div class="about-body">
                    <p>
                        {"Driftline Media is a small production house working out of a converted \
                          net loft. We spend long stretches embedded with researchers, skippers, \
                          and lifeguards, then cut what we gather into episodes that take their \
                          time."}
                    </p>
                    <p>
                        {"The podcast is the spine of the operation. Around it we produce short \
                          films, live recordings, and the occasional commissioned documentary for \
                          institutes that need their fieldwork seen."}
                    </p>
                </div>
            </section>

            <section id="contact" class="section">
                <h2 class="section-title">{"Get in touch"}</h2>
                <p class="section-lede">
                    {"For commissions, press, and partnerships, write to "}
                    <a class="inline-link" href={format!("mailto:{}", LINKS.email)}>{LINKS.email}</a>
                    {" or use the form."}
                </p>
                <form class="contact-form" onsubmit={on_contact_submit}>
                    <input
                        class="field-input"
                        type="text"
                        name="name"
                        placeholder="Your name"
                        aria-label="Your name"
                        required=true
                    />
                    <input
                        class="field-input"
                        type="email"
                        name="email"
                        placeholder="Your email"
                        aria-label="Your email"
                        required=true
                    />
                    <textarea
                        class="field-area"
                        name="message"
                        rows="5"
                        placeholder="What are you working on?"
                        aria-label="Your message"
                        required=true
                    ></textarea>
                    <button class="send-button" type="submit">{"Send message"}</button>
                </form>
            </section>

            <footer class="site-footer">
                <div class="footer-inner">
                    <div>{ format!("© {} Driftline Media", year) }</div>
                    <div class="footer-links">
                        <a class="footer-link" href="#watch">{"Watch"}</a>
                        <a class="footer-link" href="#subscribe">{"Subscribe"}</a>
                        <a class="footer-link" href={format!("mailto:{}", LINKS.email)}>{LINKS.email}</a>
                    </div>
                </div>
            </footer>
        </div>
    }
}
