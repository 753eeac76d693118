//! Browser-independent UI state machines. The `app` components drive these
//! from DOM events and timers; tests drive them directly.

mod modal;
mod overlay;
mod scroll_lock;
mod sections;
mod typewriter;

pub use modal::{ModalController, ModalState, Opened, Phase, Ticket};
pub use overlay::LockedModal;
pub use scroll_lock::{OverflowHost, ScrollLock};
pub use sections::{compute_active_index, ScrollSurface, SectionScroller};
pub use typewriter::{Typewriter, TypewriterTiming};
