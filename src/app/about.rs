use std::time::Duration;

use leptos::prelude::*;
use leptos_use::use_media_query;

use super::components::{Section, SectionHeading, TagList};
use super::detail::{item_title, ItemDetail};
use super::modal::{use_modal, AnimatedModal, ModalHandle, ModalSize};
use super::use_portfolio;
use crate::content::{Company, ContentItem};

/// Build date for the footer, e.g. "March 4, 2025".
fn build_date() -> String {
    let stamp = env!("BUILD_TIME");
    chrono::DateTime::parse_from_rfc3339(stamp)
        .map(|t| t.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|_| stamp.to_string())
}

#[allow(clippy::ptr_arg)]
fn journey_title(_: &Vec<Company>) -> String {
    "My Entrepreneurial Journey".to_string()
}

#[component]
pub fn About() -> impl IntoView {
    let portfolio = use_portfolio();
    let settings = portfolio.site.clone();
    let is_mobile = use_media_query(settings.mobile_query());
    let companies_modal = use_modal::<ContentItem>();
    let journey_modal = use_modal::<Vec<Company>>();

    let (revealed, set_revealed) = signal(false);
    let reveal = Duration::from_millis(settings.reveal_delay_ms);
    Effect::new(move |_| {
        set_timeout(move || set_revealed.set(true), reveal);
    });

    let companies = portfolio.companies.clone();
    let summary = portfolio.profile.journey_summary.clone();
    let highlights = portfolio.profile.highlights.clone();
    let preview = settings.preview_limit;

    view! {
        <Section id="about">
            <SectionHeading title="About Me" subtitle="Entrepreneur, builder, security nerd" />
            {move || {
                if is_mobile.get() {
                    view! {
                        <JourneySummary
                            summary=summary.clone()
                            highlights=highlights.clone()
                            companies=companies.clone()
                            journey_modal
                        />
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="grid w-full max-w-6xl gap-6 overflow-y-auto pb-4 scrollbar-hide md:grid-cols-3">
                            {companies
                                .iter()
                                .cloned()
                                .enumerate()
                                .map(|(index, company)| {
                                    view! {
                                        <CompanyCard
                                            company
                                            index
                                            revealed
                                            preview
                                            modal=companies_modal
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
            <p class="mt-auto pt-6 text-xs text-gray-500">
                {format!("Last updated {}", build_date())}
            </p>
            <AnimatedModal
                modal=journey_modal
                size={ModalSize::Md}
                title=journey_title
                render={move |companies: Vec<Company>| {
                    view! { <JourneyList companies modal=companies_modal /> }
                }}
            />
            <AnimatedModal
                modal=companies_modal
                title=item_title
                render={|item: ContentItem| view! { <ItemDetail item /> }}
            />
        </Section>
    }
}

#[component]
fn CompanyCard(
    company: Company,
    index: usize,
    revealed: ReadSignal<bool>,
    preview: usize,
    modal: ModalHandle<ContentItem>,
) -> impl IntoView {
    let services = company.services.clone();
    let technologies = company.technologies.clone();
    let status = company.status;
    let gradient = company.kind.gradient();
    let icon = company.icon.clone();
    let name = company.name.clone();
    let year = company.year.clone();
    let description = company.description.clone();
    let item = ContentItem::Company(company);
    // stagger the entrance per card
    let delay = format!("{}ms", index * 150);

    view! {
        <button
            class=move || {
                let base = format!(
                    "flex flex-col gap-4 rounded-2xl border bg-gradient-to-br p-6 text-left transition-all duration-700 hover:scale-[1.02] {gradient}",
                );
                if revealed.get() {
                    format!("{base} translate-y-0 opacity-100")
                } else {
                    format!("{base} translate-y-8 opacity-0")
                }
            }
            style:transition-delay=delay
            on:click=move |_| modal.open(item.clone())
        >
            <div class="flex items-center justify-between">
                <span class="text-4xl">{icon}</span>
                <span class=format!(
                    "rounded-full border px-3 py-1 text-xs font-semibold {}",
                    status.classes(),
                )>{status.label()}</span>
            </div>
            <div>
                <h3 class="text-xl font-bold text-white">{name}</h3>
                <p class="text-xs text-gray-400">{year}</p>
            </div>
            <p class="line-clamp-3 text-sm text-gray-300">{description}</p>
            <TagList tags=services limit=preview />
            <TagList tags=technologies limit=preview />
        </button>
    }
}

#[component]
fn JourneySummary(
    summary: String,
    highlights: Vec<String>,
    companies: Vec<Company>,
    journey_modal: ModalHandle<Vec<Company>>,
) -> impl IntoView {
    let count = companies.len();
    view! {
        <div class="w-full max-w-md rounded-2xl border border-white/10 bg-white/5 p-6 text-center">
            <p class="text-sm leading-relaxed text-gray-300">{summary}</p>
            <ul class="my-6 space-y-2 text-sm text-gray-200">
                {highlights.into_iter().map(|h| view! { <li>{h}</li> }).collect_view()}
            </ul>
            <button
                class="w-full rounded-xl bg-gradient-to-r from-blue-500 to-purple-500 px-6 py-3 font-semibold text-white shadow-lg"
                on:click=move |_| journey_modal.open(companies.clone())
            >
                {format!("Explore My Journey ({count} Companies)")}
            </button>
        </div>
    }
}

#[component]
fn JourneyList(companies: Vec<Company>, modal: ModalHandle<ContentItem>) -> impl IntoView {
    view! {
        <ol class="space-y-4">
            {companies
                .into_iter()
                .map(|company| {
                    let gradient = company.kind.gradient();
                    let status = company.status;
                    let heading = format!("{} {}", company.icon, company.name);
                    let year = company.year.clone();
                    let description = company.description.clone();
                    let item = ContentItem::Company(company);
                    view! {
                        <li>
                            <button
                                class=format!(
                                    "w-full rounded-xl border bg-gradient-to-br p-4 text-left {gradient}",
                                )
                                on:click=move |_| modal.open(item.clone())
                            >
                                <div class="flex items-center justify-between gap-2">
                                    <span class="font-semibold text-white">{heading}</span>
                                    <span class=format!(
                                        "rounded-full border px-2 py-0.5 text-xs {}",
                                        status.classes(),
                                    )>{status.label()}</span>
                                </div>
                                <p class="text-xs text-gray-400">{year}</p>
                                <p class="mt-2 line-clamp-2 text-sm text-gray-300">{description}</p>
                            </button>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}
