use leptos::prelude::*;

use super::components::{BadgePill, Section, SectionHeading};
use super::detail::{item_title, ItemDetail};
use super::modal::{use_modal, AnimatedModal};
use super::use_portfolio;
use crate::content::{ContentItem, Role};

#[component]
pub fn Projects() -> impl IntoView {
    let portfolio = use_portfolio();
    let modal = use_modal::<ContentItem>();

    let legend = Role::ALL
        .iter()
        .map(|role| view! { <BadgePill badge=role.badge() /> })
        .collect_view();

    let cards = portfolio
        .projects
        .iter()
        .cloned()
        .map(|project| {
            let badges = project
                .roles
                .iter()
                .map(|role| {
                    let badge = role.badge();
                    view! {
                        <span
                            title=badge.label
                            class=format!(
                                "flex h-7 w-7 items-center justify-center rounded-full border text-sm {} {}",
                                badge.bg,
                                badge.border,
                            )
                        >
                            {badge.icon}
                        </span>
                    }
                })
                .collect_view();
            let title = project.title.clone();
            let image = project.image.clone();
            let item = ContentItem::Project(project);
            view! {
                <button
                    class="group flex flex-col overflow-hidden rounded-2xl border border-white/10 bg-white/5 text-left transition-all duration-300 hover:-translate-y-1 hover:border-white/30 hover:shadow-xl"
                    on:click=move |_| modal.open(item.clone())
                >
                    <div class="flex h-28 items-center justify-center bg-white/5 p-4 sm:h-32">
                        <img
                            src=image
                            alt=title.clone()
                            class="max-h-full max-w-full object-contain transition-transform duration-300 group-hover:scale-105"
                        />
                    </div>
                    <div class="flex items-center justify-between gap-2 p-3">
                        <h3 class="truncate font-semibold">{title}</h3>
                        <div class="flex gap-1">{badges}</div>
                    </div>
                </button>
            }
        })
        .collect_view();

    view! {
        <Section id="projects">
            <SectionHeading title="Projects" subtitle="Some of the products I've helped build" />
            <div class="mb-6 flex flex-wrap justify-center gap-2">{legend}</div>
            <div class="grid w-full max-w-6xl grid-cols-2 gap-4 overflow-y-auto pb-4 scrollbar-hide md:grid-cols-3 lg:grid-cols-5">
                {cards}
            </div>
            <AnimatedModal
                modal
                title=item_title
                render={|item: ContentItem| view! { <ItemDetail item /> }}
            />
        </Section>
    }
}
