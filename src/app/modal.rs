use std::time::Duration;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::controllers::{LockedModal, OverflowHost, ScrollLock};

/// Element id of the snap container that scrolls the page.
pub const PAGE_SCROLLER_ID: &str = "page";

/// Overflow of the page scroller: the snap container when it is mounted,
/// otherwise `<body>`. Looked up on every call so the handle stays `Send`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageOverflow;

fn scroller_style() -> Option<web_sys::CssStyleDeclaration> {
    let document = web_sys::window()?.document()?;
    let scroller = match document.get_element_by_id(PAGE_SCROLLER_ID) {
        Some(el) => el.dyn_into::<web_sys::HtmlElement>().ok()?,
        None => document.body()?,
    };
    Some(scroller.style())
}

impl OverflowHost for PageOverflow {
    fn overflow(&self) -> String {
        scroller_style()
            .and_then(|style| style.get_property_value("overflow").ok())
            .unwrap_or_default()
    }

    fn set_overflow(&self, value: &str) {
        let Some(style) = scroller_style() else {
            return;
        };
        let res = if value.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", value)
        };
        if let Err(e) = res {
            log::warn!("couldn't set page overflow to {value:?}: {e:?}");
        }
    }
}

/// Page-wide modal plumbing: the shared scroll lock and the teardown delay.
#[derive(Clone, Copy)]
pub struct ModalEnv {
    lock: StoredValue<ScrollLock<PageOverflow>>,
    teardown: Duration,
}

impl ModalEnv {
    pub fn new(teardown: Duration) -> Self {
        Self {
            lock: StoredValue::new(ScrollLock::new(PageOverflow)),
            teardown,
        }
    }
}

/// Reactive wrapper around a [`LockedModal`]. Only schedules the deferred
/// transitions; the lock bookkeeping lives in the controller.
pub struct ModalHandle<T: Send + Sync + 'static> {
    modal: RwSignal<LockedModal<T>>,
    env: ModalEnv,
}

impl<T: Send + Sync + 'static> Clone for ModalHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ModalHandle<T> {}

pub fn use_modal<T>() -> ModalHandle<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    ModalHandle {
        modal: RwSignal::new(LockedModal::new()),
        env: expect_context::<ModalEnv>(),
    }
}

impl<T> ModalHandle<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn open(&self, item: T) {
        let ModalHandle { modal, env } = *self;
        let opened = env
            .lock
            .try_update_value(|lock| modal.try_update(|m| m.open(item, lock)))
            .flatten();
        if let Some(ticket) = opened.and_then(|o| o.ticket()) {
            set_timeout(
                move || {
                    modal.try_update(|m| m.finish_opening(ticket));
                },
                env.teardown,
            );
        }
    }

    pub fn close(&self) {
        let ModalHandle { modal, env } = *self;
        let Some(Some(ticket)) = modal.try_update(|m| m.close()) else {
            return;
        };
        set_timeout(
            move || {
                env.lock
                    .try_update_value(|lock| modal.try_update(|m| m.finish_closing(ticket, lock)));
            },
            env.teardown,
        );
    }

    pub fn is_animating(&self) -> bool {
        self.modal.with(|m| m.is_animating())
    }

    pub fn shown(&self) -> Option<T> {
        self.modal.with(|m| m.shown())
    }
}

/// Maximum panel width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalSize {
    Sm,
    Md,
    #[default]
    Lg,
    Xl,
}

impl ModalSize {
    pub fn panel_classes(&self) -> &'static str {
        match self {
            ModalSize::Sm => "relative flex max-h-[90vh] w-full max-w-md flex-col overflow-hidden rounded-2xl border border-white/20 bg-gray-900/95 shadow-2xl backdrop-blur-xl",
            ModalSize::Md => "relative flex max-h-[90vh] w-full max-w-2xl flex-col overflow-hidden rounded-2xl border border-white/20 bg-gray-900/95 shadow-2xl backdrop-blur-xl",
            ModalSize::Lg => "relative flex max-h-[90vh] w-full max-w-4xl flex-col overflow-hidden rounded-2xl border border-white/20 bg-gray-900/95 shadow-2xl backdrop-blur-xl",
            ModalSize::Xl => "relative flex max-h-[90vh] w-full max-w-6xl flex-col overflow-hidden rounded-2xl border border-white/20 bg-gray-900/95 shadow-2xl backdrop-blur-xl",
        }
    }
}

/// Overlay shell shared by every section: dimmed backdrop, a header bar with
/// the title and close button, and enter/exit animation. Both the backdrop
/// and the button close the modal.
#[component]
pub fn AnimatedModal<T, TF, F, IV>(
    modal: ModalHandle<T>,
    title: TF,
    render: F,
    #[prop(optional)] size: ModalSize,
) -> impl IntoView
where
    T: Clone + PartialEq + Send + Sync + 'static,
    TF: Fn(&T) -> String + Send + Sync + 'static,
    F: Fn(T) -> IV + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    let shown = Memo::new(move |_| modal.shown());

    move || {
        let item = shown.get()?;
        let heading = title(&item);
        let body = render(item);
        Some(view! {
            <div class=move || {
                if modal.is_animating() {
                    "fixed inset-0 z-50 flex items-center justify-center p-4 animate-fade-in"
                } else {
                    "fixed inset-0 z-50 flex items-center justify-center p-4 animate-fade-out"
                }
            }>
                <div
                    class="absolute inset-0 bg-black/70 backdrop-blur-md"
                    on:click=move |_| modal.close()
                ></div>
                <div class=size.panel_classes()>
                    <div class="flex items-center justify-between border-b border-white/20 bg-gradient-to-r from-blue-500/10 to-purple-500/10 p-6">
                        <h2 class="text-2xl font-bold text-white">{heading}</h2>
                        <button
                            class="group flex h-10 w-10 items-center justify-center rounded-full text-3xl font-light text-gray-400 transition-colors duration-300 hover:bg-white/10 hover:text-white"
                            aria-label="Close"
                            on:click=move |_| modal.close()
                        >
                            <span class="transition-transform duration-300 group-hover:rotate-90">
                                "×"
                            </span>
                        </button>
                    </div>
                    <div class="overflow-y-auto p-6">{body}</div>
                </div>
            </div>
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_map_to_widths() {
        assert_eq!(ModalSize::default(), ModalSize::Lg);
        assert!(ModalSize::Sm.panel_classes().contains("max-w-md"));
        assert!(ModalSize::Md.panel_classes().contains("max-w-2xl"));
        assert!(ModalSize::Lg.panel_classes().contains("max-w-4xl"));
        assert!(ModalSize::Xl.panel_classes().contains("max-w-6xl"));
    }
}
