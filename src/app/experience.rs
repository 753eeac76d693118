use leptos::prelude::*;

use super::components::{BadgePill, Section, SectionHeading, TagList};
use super::detail::{item_title, ItemDetail};
use super::modal::{use_modal, AnimatedModal, ModalHandle};
use super::use_portfolio;
use crate::content::{ContentItem, Experience};

#[component]
pub fn ExperienceTimeline() -> impl IntoView {
    let portfolio = use_portfolio();
    let modal = use_modal::<ContentItem>();
    let entries = portfolio
        .experiences
        .iter()
        .cloned()
        .map(|job| view! { <TimelineEntry job modal /> })
        .collect_view();

    view! {
        <Section id="experience">
            <SectionHeading title="Experience" subtitle="Where I've been building" />
            <div class="relative w-full max-w-4xl overflow-y-auto pb-4 pl-8 scrollbar-hide">
                <div class="absolute bottom-0 left-3 top-0 w-px bg-gradient-to-b from-blue-500 via-purple-500 to-transparent"></div>
                <ol class="space-y-6">{entries}</ol>
            </div>
            <AnimatedModal
                modal
                title=item_title
                render={|item: ContentItem| view! { <ItemDetail item /> }}
            />
        </Section>
    }
}

#[component]
fn TimelineEntry(job: Experience, modal: ModalHandle<ContentItem>) -> impl IntoView {
    let (show_achievements, set_show_achievements) = signal(false);
    let badge = job.kind.badge();
    let achievements = job.achievements.clone();
    let technologies = job.technologies.clone();
    let title = job.title.clone();
    let subtitle = format!("{} · {}", job.company, job.location);
    let period = job.period.clone();
    let description = job.description.clone();
    let item = ContentItem::Experience(job);

    view! {
        <li class="relative">
            <span class="absolute -left-[1.6rem] top-2 h-3 w-3 rounded-full border-2 border-blue-400 bg-gray-950"></span>
            <div class="rounded-2xl border border-white/10 bg-white/5 p-5 backdrop-blur-sm">
                <div class="flex flex-wrap items-start justify-between gap-2">
                    <div>
                        <button
                            class="text-left text-lg font-semibold text-white transition-colors hover:text-blue-300"
                            on:click=move |_| modal.open(item.clone())
                        >
                            {title}
                        </button>
                        <p class="text-sm text-gray-400">{subtitle}</p>
                    </div>
                    <div class="flex flex-col items-end gap-1">
                        <BadgePill badge />
                        <span class="font-mono text-xs text-gray-500">{period}</span>
                    </div>
                </div>
                <p class="mt-3 text-sm leading-relaxed text-gray-300">{description}</p>
                <div class="mt-3">
                    <TagList tags=technologies />
                </div>
                <button
                    class="mt-4 text-sm font-medium text-blue-400 hover:text-blue-300"
                    on:click=move |_| set_show_achievements.update(|open| *open = !*open)
                >
                    {move || {
                        if show_achievements.get() { "Hide Achievements ▴" } else { "Show Achievements ▾" }
                    }}
                </button>
                {move || {
                    show_achievements
                        .get()
                        .then(|| {
                            view! {
                                <ul class="mt-3 space-y-2 text-sm text-gray-300">
                                    {achievements
                                        .clone()
                                        .into_iter()
                                        .map(|a| {
                                            view! {
                                                <li class="flex gap-2">
                                                    <span class="text-green-400">"✓"</span>
                                                    <span>{a}</span>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            }
                        })
                }}
            </div>
        </li>
    }
}
