use leptos::prelude::*;
use leptos_use::use_interval_fn;

use super::components::{open_external, ScrollHint, Section};
use super::use_portfolio;
use crate::controllers::{Typewriter, TypewriterTiming};

#[component]
pub fn Introduction() -> impl IntoView {
    let profile = use_portfolio().profile.clone();
    let timing = TypewriterTiming::default();
    let writer = StoredValue::new(Typewriter::new(profile.phrases.clone(), timing));
    let (text, set_text) = signal(String::new());
    let (delay, set_delay) = signal(timing.type_ms);

    // the interval restarts whenever `delay` changes
    use_interval_fn(
        move || {
            writer.update_value(|w| {
                w.tick();
                set_text.set(w.text().to_string());
                set_delay.set(w.delay_ms());
            });
        },
        delay,
    );

    let name = profile.name.clone();
    let socials = profile
        .socials
        .into_iter()
        .map(|link| {
            let url = link.url.clone();
            view! {
                <button
                    class="flex h-12 w-12 items-center justify-center rounded-full border border-white/20 bg-white/5 text-2xl text-gray-300 transition-all duration-300 hover:scale-110 hover:border-blue-400 hover:text-white"
                    aria-label=link.label
                    on:click=move |_| open_external(&url)
                >
                    <i class=link.icon></i>
                </button>
            }
        })
        .collect_view();

    view! {
        <Section id="introduction" background="justify-center">
            <div class="flex flex-col items-center gap-8 text-center">
                <img
                    src=profile.photo
                    alt=name.clone()
                    class="h-40 w-40 rounded-full border-4 border-white/10 object-cover shadow-2xl sm:h-48 sm:w-48"
                />
                <h1 class="text-4xl font-bold sm:text-6xl">
                    "Hi, I'm "
                    <span class="bg-gradient-to-r from-blue-400 to-purple-500 bg-clip-text text-transparent">
                        {name}
                    </span>
                </h1>
                <p class="h-8 font-mono text-lg text-gray-300 sm:text-2xl">
                    {text}
                    <span class="animate-pulse text-blue-400">"."</span>
                </p>
                <div class="flex gap-4">{socials}</div>
            </div>
            <ScrollHint />
        </Section>
    }
}
