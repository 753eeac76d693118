use leptos::prelude::*;

use super::components::{BadgePill, Section, SectionHeading, TagList};
use super::detail::{item_title, ItemDetail};
use super::modal::{use_modal, AnimatedModal, ModalHandle};
use super::use_portfolio;
use crate::content::{Badge, ContentItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Certifications,
    Education,
}

#[component]
pub fn Credentials() -> impl IntoView {
    let portfolio = use_portfolio();
    let modal = use_modal::<ContentItem>();
    let preview = portfolio.site.preview_limit;
    let (tab, set_tab) = signal(Tab::Certifications);

    let certifications: Vec<ContentItem> = portfolio
        .certifications
        .iter()
        .cloned()
        .map(ContentItem::Certification)
        .collect();
    let studies: Vec<ContentItem> = portfolio
        .studies
        .iter()
        .cloned()
        .map(ContentItem::Study)
        .collect();

    let tab_button = move |which: Tab, label: &'static str| {
        view! {
            <button
                class=move || {
                    if tab.get() == which {
                        "rounded-lg bg-gradient-to-r from-blue-500 to-purple-500 px-6 py-2 font-semibold text-white shadow-lg"
                    } else {
                        "rounded-lg px-6 py-2 font-semibold text-gray-400 transition-colors hover:text-white"
                    }
                }
                on:click=move |_| set_tab.set(which)
            >
                {label}
            </button>
        }
    };

    view! {
        <Section id="certifications">
            <SectionHeading title="Certifications & Education" />
            <div class="mb-8 flex gap-2 rounded-xl border border-white/10 bg-white/5 p-1">
                {tab_button(Tab::Certifications, "Certifications")}
                {tab_button(Tab::Education, "Education")}
            </div>
            <div class="grid w-full max-w-5xl gap-6 overflow-y-auto pb-4 scrollbar-hide md:grid-cols-2">
                {move || {
                    let items = match tab.get() {
                        Tab::Certifications => certifications.clone(),
                        Tab::Education => studies.clone(),
                    };
                    items
                        .into_iter()
                        .map(|item| view! { <CredentialCard item modal preview /> })
                        .collect_view()
                }}
            </div>
            <AnimatedModal
                modal
                title=item_title
                render={|item: ContentItem| view! { <ItemDetail item /> }}
            />
        </Section>
    }
}

fn badge_for(item: &ContentItem) -> Option<(Badge, String, String)> {
    match item {
        ContentItem::Certification(c) => Some((c.category.badge(), c.issuer.clone(), c.date.clone())),
        ContentItem::Study(s) => Some((s.kind.badge(), s.institution.clone(), s.date.clone())),
        _ => None,
    }
}

#[component]
fn CredentialCard(item: ContentItem, modal: ModalHandle<ContentItem>, preview: usize) -> impl IntoView {
    let Some((badge, source, date)) = badge_for(&item) else {
        return ().into_any();
    };
    let image = match &item {
        ContentItem::Certification(c) => c.image.clone(),
        ContentItem::Study(s) => s.image.clone(),
        _ => String::new(),
    };
    let title = item.title().to_string();
    let tags = item.tags();

    view! {
        <button
            class=format!("flex flex-col gap-4 text-left {}", badge.panel_classes())
            on:click=move |_| modal.open(item.clone())
        >
            <div class="flex items-start gap-4">
                <img
                    src=image
                    alt=""
                    class="h-14 w-14 flex-shrink-0 rounded-lg bg-white/10 object-contain p-2"
                />
                <div class="min-w-0 flex-1">
                    <h3 class="font-semibold leading-tight text-white">{title}</h3>
                    <p class="mt-1 text-sm text-gray-400">{source}</p>
                    <p class="text-xs text-gray-500">{date}</p>
                </div>
                <BadgePill badge />
            </div>
            <TagList tags limit=preview />
        </button>
    }
    .into_any()
}
