use leptos::prelude::*;

use super::components::Section;
use crate::content::{ImageSide, TechStack, Technology};

/// Full-page section for one role: artwork on one side, a snapping list of
/// technologies on the other.
#[component]
pub fn TechStackSection(stack: TechStack) -> impl IntoView {
    let artwork = view! {
        <div class="hidden items-center justify-center md:flex">
            <img
                src=stack.image.clone()
                alt=stack.role.clone()
                class="max-h-[60vh] w-full object-contain drop-shadow-2xl"
            />
        </div>
    };
    let technologies = stack
        .technologies
        .iter()
        .cloned()
        .map(|tech| view! { <TechnologyCard tech /> })
        .collect_view();
    let details = view! {
        <div class="flex min-h-0 flex-col">
            <h2 class="bg-gradient-to-r from-blue-400 to-purple-500 bg-clip-text text-3xl font-bold text-transparent sm:text-4xl">
                {stack.role.clone()}
            </h2>
            <p class="mt-4 text-sm leading-relaxed text-gray-300 sm:text-base">
                {stack.summary.clone()}
            </p>
            <div class="mt-6 h-[45vh] snap-y snap-mandatory space-y-4 overflow-y-auto pr-2 scrollbar-hide">
                {technologies}
            </div>
        </div>
    };

    let layout = match stack.image_side {
        ImageSide::Left => view! { {artwork} {details} }.into_any(),
        ImageSide::Right => view! { {details} {artwork} }.into_any(),
    };

    view! {
        <Section id=stack.id.clone() background="justify-center">
            <div class="grid w-full max-w-6xl items-center gap-10 md:grid-cols-2">{layout}</div>
        </Section>
    }
}

#[component]
fn TechnologyCard(tech: Technology) -> impl IntoView {
    view! {
        <article class="flex snap-start gap-4 rounded-2xl border border-white/10 bg-white/5 p-5">
            <img
                src=tech.image
                alt=tech.title.clone()
                class="h-14 w-14 flex-shrink-0 rounded-lg bg-white/10 object-contain p-2"
            />
            <div>
                <h3 class="font-semibold text-white">{tech.title}</h3>
                <p class="text-xs uppercase tracking-wider text-blue-300">{tech.subtitle}</p>
                <p class="mt-2 text-sm leading-relaxed text-gray-300">{tech.description}</p>
            </div>
        </article>
    }
}
