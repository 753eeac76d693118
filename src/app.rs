mod about;
mod components;
mod credentials;
mod detail;
mod experience;
mod introduction;
mod modal;
mod navigation;
mod projects;
mod skills;
mod tech_stack;

use std::{sync::Arc, time::Duration};

use leptos::{html, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{ContentError, Portfolio};
use crate::controllers::{ScrollSurface, SectionScroller};

use about::About;
use credentials::Credentials;
use experience::ExperienceTimeline;
use introduction::Introduction;
use modal::{ModalEnv, PAGE_SCROLLER_ID};
use navigation::Navigation;
use projects::Projects;
use skills::Skills;
use tech_stack::TechStackSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-gray-950 text-white antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let content = Portfolio::shared();
    let name = content
        .as_ref()
        .map(|p| p.profile.name.clone())
        .unwrap_or_else(|_| "Portfolio".to_string());

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=path!("/")
                    view=move || match content.clone() {
                        Ok(portfolio) => view! { <HomePage portfolio /> }.into_any(),
                        Err(error) => view! { <ContentUnavailable error /> }.into_any(),
                    }
                />
            </Routes>
        </Router>
    }
}

/// The portfolio provided by [`HomePage`].
pub(crate) fn use_portfolio() -> Arc<Portfolio> {
    expect_context::<Arc<Portfolio>>()
}

/// The scrolling `<main>` element. Sections snap to its viewport, so its own
/// `scrollTop` (not the window's) is what selects the active section.
#[derive(Clone, Copy)]
struct SnapContainer(NodeRef<html::Main>);

impl ScrollSurface for SnapContainer {
    fn viewport_height(&self) -> f64 {
        self.0
            .get_untracked()
            .map(|el| f64::from(el.client_height()))
            .unwrap_or(0.0)
    }

    fn scroll_offset(&self) -> f64 {
        self.0
            .get_untracked()
            .map(|el| f64::from(el.scroll_top()))
            .unwrap_or(0.0)
    }

    fn request_scroll(&self, top: f64) {
        let Some(el) = self.0.get_untracked() else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_to_with_scroll_to_options(&options);
    }
}

#[component]
fn HomePage(portfolio: Arc<Portfolio>) -> impl IntoView {
    provide_context(portfolio.clone());
    provide_context(ModalEnv::new(Duration::from_millis(
        portfolio.site.teardown_delay_ms,
    )));

    let titles = portfolio.section_titles();
    let scroller = SectionScroller::new(titles.len());
    let container = NodeRef::<html::Main>::new();
    let surface = SnapContainer(container);
    let (active, set_active) = signal(0usize);

    let on_select = Callback::new(move |index: usize| {
        scroller.scroll_to(&surface, index);
    });

    let stacks = portfolio
        .stacks
        .iter()
        .cloned()
        .map(|stack| view! { <TechStackSection stack /> })
        .collect_view();

    view! {
        <Title text="Portfolio" />
        <Navigation titles active on_select />
        <main
            id=PAGE_SCROLLER_ID
            node_ref=container
            on:scroll=move |_| {
                let index = scroller.active_index(&surface);
                if active.get_untracked() != index {
                    set_active.set(index);
                }
            }
            class="h-screen overflow-y-scroll snap-y snap-mandatory scrollbar-hide bg-gradient-to-b from-gray-950 via-gray-900 to-gray-950"
        >
            <Introduction />
            <Projects />
            <Credentials />
            <Skills />
            <ExperienceTimeline />
            <About />
            {stacks}
        </main>
    }
}

#[component]
fn ContentUnavailable(error: ContentError) -> impl IntoView {
    view! {
        <Title text="Unavailable" />
        <main class="flex h-screen flex-col items-center justify-center gap-4 px-6 text-center">
            <h1 class="text-2xl font-bold text-red-400">"This page couldn't be loaded"</h1>
            <p class="max-w-xl text-gray-400">{error.to_string()}</p>
        </main>
    }
}
