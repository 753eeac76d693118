use leptos::prelude::*;

use crate::content::{split_preview, Badge};

/// Opens `url` in a new tab without giving it a handle back to this page.
pub fn open_external(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer") {
        Ok(_) => log::debug!("opened {url}"),
        Err(e) => log::warn!("couldn't open {url}: {e:?}"),
    }
}

#[component]
pub fn Section(
    #[prop(into)] id: String,
    #[prop(into, optional)] background: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            id=id
            class=format!(
                "relative flex min-h-screen h-screen w-full snap-start flex-col items-center overflow-hidden px-4 py-16 sm:px-8 {background}",
            )
        >
            {children()}
        </section>
    }
}

#[component]
pub fn SectionHeading(
    #[prop(into)] title: String,
    #[prop(into, optional)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div class="mb-8 text-center">
            <h2 class="bg-gradient-to-r from-blue-400 via-purple-400 to-pink-400 bg-clip-text text-3xl font-bold text-transparent sm:text-4xl">
                {title}
            </h2>
            {subtitle.map(|s| view! { <p class="mt-2 text-sm text-gray-400 sm:text-base">{s}</p> })}
        </div>
    }
}

#[component]
pub fn BadgePill(badge: Badge) -> impl IntoView {
    view! {
        <span class=badge.pill_classes()>
            <span class="mr-1">{badge.icon}</span>
            {badge.label}
        </span>
    }
}

/// Tag chips. With `limit`, only the first few are shown followed by a
/// `+N more` chip.
#[component]
pub fn TagList(tags: Vec<String>, #[prop(optional)] limit: Option<usize>) -> impl IntoView {
    let limit = limit.unwrap_or(tags.len());
    let (shown, hidden) = split_preview(&tags, limit);
    let chips = shown
        .iter()
        .map(|tag| {
            view! {
                <span class="rounded-md border border-white/10 bg-white/5 px-2 py-1 text-xs text-gray-300">
                    {tag.clone()}
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="flex flex-wrap gap-2">
            {chips}
            {(hidden > 0)
                .then(|| {
                    view! {
                        <span class="rounded-md bg-white/10 px-2 py-1 text-xs text-gray-400">
                            {format!("+{hidden} more")}
                        </span>
                    }
                })}
        </div>
    }
}

#[component]
pub fn ScrollHint() -> impl IntoView {
    view! {
        <div class="absolute bottom-6 left-1/2 flex -translate-x-1/2 flex-col items-center text-gray-400 animate-bounce">
            <span class="text-xs uppercase tracking-widest">"Scroll"</span>
            <span class="text-xl">"↓"</span>
        </div>
    }
}
