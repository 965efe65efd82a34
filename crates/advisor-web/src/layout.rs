//! Page shell: navbar, footer, and the page background.
//!
//! Each page states the background it wants through [`PageLayout`]; the
//! wrapper renders it as a class on its own root element, so nothing
//! outside the page is touched.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::BRAND;

/// Navbar turns opaque once the page has scrolled past this many pixels
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > SCROLL_THRESHOLD_PX
}

/// Page background
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Background {
    #[default]
    Default,
    /// Near-black backdrop used by the landing and intake/chat pages
    Dark,
}

impl Background {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Default => "bg-default",
            Self::Dark => "bg-dark",
        }
    }
}

const NAV_LINKS: [(&str, &str); 4] = [
    ("Features", "/#features"),
    ("How It Works", "/#how-it-works"),
    ("Testimonials", "/#testimonials"),
    ("Pricing", "/#pricing"),
];

#[component]
pub fn PageLayout(#[prop(optional)] background: Background, children: Children) -> impl IntoView {
    let class = format!("page {}", background.class());

    view! {
        <div class=class>
            <Navbar />
            <main class="page-main">{children()}</main>
            <Footer />
        </div>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);

    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        set_scrolled.set(is_scrolled(window().scroll_y().unwrap_or(0.0)));
    });
    on_cleanup(move || handle.remove());

    let links = move || {
        NAV_LINKS
            .iter()
            .map(|(label, href)| {
                view! {
                    <a href=*href on:click=move |_| set_menu_open.set(false)>{*label}</a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="navbar" class:scrolled=move || scrolled.get()>
            <A href="/" attr:class="brand">{BRAND}</A>

            <nav class="nav-links">{links}</nav>

            <div class="nav-actions">
                <A href="/get-started" attr:class="btn btn-primary">"Sign up"</A>
            </div>

            <button class="menu-toggle" on:click=move |_| set_menu_open.set(true)>"☰"</button>

            <div class="mobile-menu" class:open=move || menu_open.get()>
                <div class="mobile-menu-header">
                    <span class="brand">{BRAND}</span>
                    <button on:click=move |_| set_menu_open.set(false)>"✕"</button>
                </div>
                <nav class="mobile-links">{links}</nav>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-brand">
                <span class="brand">{BRAND}</span>
                <p>"AI-powered tools to validate, optimize, and scale your startup."</p>
            </div>
            <nav class="footer-links">
                <A href="/features">"Features"</A>
                <A href="/how-it-works">"How It Works"</A>
                <A href="/testimonials">"Testimonials"</A>
                <A href="/pricing">"Pricing"</A>
            </nav>
            <p class="copyright">"© 2024 " {BRAND} ". All rights reserved."</p>
        </footer>
    }
}
