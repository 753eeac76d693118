use leptos::prelude::*;

use super::components::{open_external, BadgePill, TagList};
use crate::content::{Certification, Company, ContentItem, Experience, Project, Study};

pub fn item_title(item: &ContentItem) -> String {
    item.title().to_string()
}

/// Modal body for any [`ContentItem`]. The title sits in the modal header.
#[component]
pub fn ItemDetail(item: ContentItem) -> impl IntoView {
    match item {
        ContentItem::Project(project) => view! { <ProjectDetail project /> }.into_any(),
        ContentItem::Certification(cert) => view! { <CertificationDetail cert /> }.into_any(),
        ContentItem::Study(study) => view! { <StudyDetail study /> }.into_any(),
        ContentItem::Experience(job) => view! { <ExperienceDetail job /> }.into_any(),
        ContentItem::Company(company) => view! { <CompanyDetail company /> }.into_any(),
    }
}

#[component]
fn DetailHeader(
    #[prop(into)] subtitle: String,
    image: Option<String>,
) -> impl IntoView {
    view! {
        <div class="mb-6 flex items-center gap-4">
            {image
                .map(|src| {
                    view! {
                        <img
                            src=src
                            alt=""
                            class="h-16 w-16 flex-shrink-0 rounded-xl bg-white/5 object-contain p-2"
                        />
                    }
                })}
            <p class="text-sm text-gray-400">{subtitle}</p>
        </div>
    }
}

#[component]
fn Labelled(#[prop(into)] label: String, children: Children) -> impl IntoView {
    view! {
        <div class="mt-6">
            <h4 class="mb-3 text-sm font-semibold uppercase tracking-wider text-gray-400">
                {label}
            </h4>
            {children()}
        </div>
    }
}

#[component]
fn Bullets(items: Vec<String>) -> impl IntoView {
    view! {
        <ul class="space-y-2 text-sm text-gray-300">
            {items
                .into_iter()
                .map(|item| {
                    view! {
                        <li class="flex gap-2">
                            <span class="text-green-400">"▸"</span>
                            <span>{item}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
fn ProjectDetail(project: Project) -> impl IntoView {
    let url = project.url.clone();
    view! {
        <img
            src=project.image.clone()
            alt=project.title.clone()
            class="mb-6 h-48 w-full rounded-xl bg-white/5 object-contain"
        />
        <DetailHeader subtitle="Project" image=None />
        <p class="leading-relaxed text-gray-300">{project.description.clone()}</p>
        <Labelled label="Roles">
            <div class="flex flex-wrap gap-2">
                {project
                    .roles
                    .iter()
                    .map(|role| view! { <BadgePill badge=role.badge() /> })
                    .collect_view()}
            </div>
        </Labelled>
        {url.map(|url| view! { <VisitButton url label="Visit project" /> })}
    }
}

#[component]
fn CertificationDetail(cert: Certification) -> impl IntoView {
    let credential = cert.credential_id.clone();
    view! {
        <DetailHeader
            subtitle=format!("{} · {}", cert.issuer, cert.date)
            image=Some(cert.image.clone())
        />
        <div class="mb-4">
            <BadgePill badge=cert.category.badge() />
        </div>
        <p class="leading-relaxed text-gray-300">{cert.description.clone()}</p>
        {credential
            .map(|id| {
                view! {
                    <p class="mt-4 font-mono text-xs text-gray-400">"Credential ID: " {id}</p>
                }
            })}
        <Labelled label="Skills">
            <TagList tags=cert.skills.clone() />
        </Labelled>
    }
}

#[component]
fn StudyDetail(study: Study) -> impl IntoView {
    view! {
        <DetailHeader
            subtitle=format!("{} · {}", study.institution, study.date)
            image=Some(study.image.clone())
        />
        <div class="mb-4">
            <BadgePill badge=study.kind.badge() />
        </div>
        <p class="leading-relaxed text-gray-300">{study.description.clone()}</p>
        <Labelled label="Skills">
            <TagList tags=study.skills.clone() />
        </Labelled>
    }
}

#[component]
fn ExperienceDetail(job: Experience) -> impl IntoView {
    view! {
        <DetailHeader
            subtitle=format!("{} · {} · {}", job.company, job.location, job.period)
            image=job.logo.clone()
        />
        <div class="mb-4">
            <BadgePill badge=job.kind.badge() />
        </div>
        <p class="leading-relaxed text-gray-300">{job.description.clone()}</p>
        <Labelled label="Key Achievements">
            <Bullets items=job.achievements.clone() />
        </Labelled>
        <Labelled label="Technologies">
            <TagList tags=job.technologies.clone() />
        </Labelled>
    }
}

#[component]
fn CompanyDetail(company: Company) -> impl IntoView {
    let website = company.website.clone();
    view! {
        <div class="mb-6 flex items-center gap-4">
            <span class="text-5xl">{company.icon.clone()}</span>
            <p class="text-sm text-gray-400">{company.year.clone()}</p>
            <span class=format!(
                "ml-auto rounded-full border px-3 py-1 text-xs font-semibold {}",
                company.status.classes(),
            )>{company.status.label()}</span>
        </div>
        <p class="leading-relaxed text-gray-300">{company.description.clone()}</p>
        <Labelled label="Services">
            <Bullets items=company.services.clone() />
        </Labelled>
        <Labelled label="Achievements">
            <Bullets items=company.achievements.clone() />
        </Labelled>
        <Labelled label="Technologies">
            <TagList tags=company.technologies.clone() />
        </Labelled>
        {website.map(|url| view! { <VisitButton url label="Visit website" /> })}
    }
}

#[component]
fn VisitButton(url: String, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <button
            class="mt-8 w-full rounded-xl bg-gradient-to-r from-blue-500 to-purple-500 px-6 py-3 font-semibold text-white transition-transform hover:scale-[1.02]"
            on:click=move |_| open_external(&url)
        >
            {label}
            " ↗"
        </button>
    }
}
