use leptos::prelude::*;

use crate::{
    contact::{Notice, NoticeKind},
    toast::{ToastQueue, TOAST_LIFETIME},
};

/// Transient notifications, newest last.
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<ToastQueue>,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new()),
        }
    }

    pub fn push(&self, notice: Notice) {
        let Some(id) = self.queue.try_update(|q| q.push(notice)) else {
            return;
        };

        let toasts = *self;
        set_timeout(move || toasts.dismiss(id), TOAST_LIFETIME);
    }

    pub fn dismiss(&self, id: u64) {
        // the timer may outlive the owning view
        let _ = self.queue.try_update(|q| q.dismiss(id));
    }
}

#[component]
pub fn ToastViewport() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <ol class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80 max-w-[calc(100vw-2rem)]">
            <For
                each=move || toasts.queue.with(|q| q.items().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let (accent, glyph) = match toast.notice.kind {
                        NoticeKind::Success => ("border-neon-cyan/50", "✓"),
                        NoticeKind::Error => ("border-neon-pink/50", "✕"),
                    };
                    let id = toast.id;
                    view! {
                        <li
                            role="status"
                            class=format!(
                                "glass-card toast-enter flex items-start gap-3 rounded-lg border px-4 py-3 text-sm {accent}",
                            )
                        >
                            <span aria-hidden="true">{glyph}</span>
                            <span class="flex-1">{toast.notice.message}</span>
                            <button
                                class="text-muted-foreground hover:text-foreground"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "×"
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}
