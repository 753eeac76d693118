use std::time::Duration;

use leptos::prelude::*;

use super::components::{Section, SectionHeading};
use super::use_portfolio;
use crate::content::{LevelBand, Skill, SkillCategory};

#[component]
pub fn Skills() -> impl IntoView {
    let portfolio = use_portfolio();
    let reveal = Duration::from_millis(portfolio.site.reveal_delay_ms);
    let cards = portfolio
        .skills
        .iter()
        .cloned()
        .map(|category| view! { <CategoryCard category reveal /> })
        .collect_view();

    view! {
        <Section id="skills">
            <SectionHeading title="Skills" subtitle="Technologies I work with every day" />
            <div class="grid w-full max-w-6xl items-start gap-4 overflow-y-auto pb-4 scrollbar-hide md:grid-cols-2 lg:grid-cols-3">
                {cards}
            </div>
        </Section>
    }
}

#[component]
fn CategoryCard(category: SkillCategory, reveal: Duration) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);
    let badge = category.accent.badge();
    let count = category.skills.len();
    let skills = category.skills;

    view! {
        <div class=badge.panel_classes()>
            <button
                class="flex w-full items-center justify-between text-left"
                on:click=move |_| set_expanded.update(|open| *open = !*open)
            >
                <span class="flex items-center gap-3">
                    <span class="text-2xl">{category.icon}</span>
                    <span>
                        <span class="block font-semibold text-white">{category.name}</span>
                        <span class="block text-xs text-gray-400">{format!("{count} skills")}</span>
                    </span>
                </span>
                <span class=move || {
                    if expanded.get() {
                        "rotate-180 text-gray-300 transition-transform duration-300"
                    } else {
                        "text-gray-300 transition-transform duration-300"
                    }
                }>"▾"</span>
            </button>
            {move || {
                expanded
                    .get()
                    .then(|| {
                        view! {
                            <div class="mt-4 space-y-4">
                                {skills
                                    .clone()
                                    .into_iter()
                                    .map(|skill| view! { <SkillBar skill reveal /> })
                                    .collect_view()}
                            </div>
                        }
                    })
            }}
        </div>
    }
}

/// Level bar that grows from zero once the reveal delay has passed.
#[component]
fn SkillBar(skill: Skill, reveal: Duration) -> impl IntoView {
    let (revealed, set_revealed) = signal(false);
    Effect::new(move |_| {
        set_timeout(move || set_revealed.set(true), reveal);
    });

    let level = skill.level;
    let band = LevelBand::from_level(level);

    view! {
        <div title=skill.description>
            <div class="mb-1 flex items-center justify-between text-sm">
                <span class="flex items-center gap-2 text-gray-200">
                    <span>{skill.icon}</span>
                    {skill.name}
                </span>
                <span class="font-mono text-xs text-gray-400">{format!("{level}%")}</span>
            </div>
            <div class="h-2 w-full overflow-hidden rounded-full bg-white/10">
                <div
                    class=format!(
                        "h-full rounded-full transition-all duration-1000 ease-out {}",
                        band.bar_classes(),
                    )
                    style:width=move || {
                        if revealed.get() { format!("{level}%") } else { "0%".to_string() }
                    }
                ></div>
            </div>
        </div>
    }
}
