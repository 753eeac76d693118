use leptos::prelude::*;

// Shown at every width; on phones the rail hugs the edge.
const RAIL_CLASSES: &str = "fixed right-2 top-1/2 z-40 -translate-y-1/2 sm:right-4";

fn dot_classes(active: bool) -> &'static str {
    if active {
        "h-3 w-3 scale-125 rounded-full bg-white shadow-lg shadow-white/40 transition-all duration-300"
    } else {
        "h-3 w-3 rounded-full bg-white/30 transition-all duration-300 hover:bg-white/70"
    }
}

/// Dot per section, fixed to the right edge. The dot for `active` is
/// highlighted and clicking a dot asks for a jump to its section.
#[component]
pub fn Navigation(
    titles: Vec<String>,
    active: ReadSignal<usize>,
    on_select: Callback<usize>,
) -> impl IntoView {
    let dots = titles
        .into_iter()
        .enumerate()
        .map(|(index, title)| {
            view! {
                <li class="group relative flex items-center justify-end">
                    <span class="pointer-events-none absolute right-6 whitespace-nowrap rounded-md bg-gray-800/90 px-2 py-1 text-xs text-white opacity-0 transition-opacity duration-200 group-hover:opacity-100">
                        {title.clone()}
                    </span>
                    <button
                        aria-label=title
                        class=move || dot_classes(active.get() == index)
                        on:click=move |_| on_select.run(index)
                    ></button>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class=RAIL_CLASSES>
            <ul class="flex flex-col gap-4">{dots}</ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rail_visible_on_small_screens() {
        let classes: Vec<&str> = RAIL_CLASSES.split_whitespace().collect();
        assert!(!classes.contains(&"hidden"));
        assert!(!classes.iter().any(|c| c.ends_with(":block")));
        assert!(classes.contains(&"fixed"));
    }

    #[test]
    fn test_active_dot_stands_out() {
        assert!(dot_classes(true).contains("scale-125"));
        assert!(!dot_classes(false).contains("scale-125"));
    }
}
