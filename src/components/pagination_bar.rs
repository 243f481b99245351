//! Page selector with a one-way "Show full list" switch.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered under paginated tables only while the list reports more than one
//! page. The owning view decides visibility; this component only emits page
//! and show-all intents.

#[cfg(test)]
#[path = "pagination_bar_test.rs"]
mod pagination_bar_test;

use leptos::prelude::*;

/// Pages always shown in full without gaps.
const COMPACT_PAGE_LIMIT: u32 = 7;

/// One slot of the page selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Gap,
}

/// Slots for `total` pages around `current`: first, last, current and its
/// neighbors, with gaps for skipped runs.
#[must_use]
pub fn page_items(current: u32, total: u32) -> Vec<PageItem> {
    if total == 0 {
        return Vec::new();
    }
    if total <= COMPACT_PAGE_LIMIT {
        return (1..=total).map(PageItem::Page).collect();
    }
    let current = current.clamp(1, total);
    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total - 1);

    let mut items = vec![PageItem::Page(1)];
    if start > 2 {
        items.push(PageItem::Gap);
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < total - 1 {
        items.push(PageItem::Gap);
    }
    items.push(PageItem::Page(total));
    items
}

#[component]
pub fn PaginationBar(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    on_select: Callback<u32>,
    on_show_all: Callback<()>,
) -> impl IntoView {
    view! {
        <nav class="pagination">
            <button
                class="btn pagination__step"
                disabled=move || page.get() <= 1
                on:click=move |_| on_select.run(page.get_untracked().saturating_sub(1).max(1))
            >
                "‹"
            </button>
            {move || {
                let current = page.get();
                page_items(current, total_pages.get())
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Page(n) => {
                            view! {
                                <button
                                    class="btn pagination__page"
                                    class:pagination__page--active=move || n == current
                                    on:click=move |_| on_select.run(n)
                                >
                                    {n}
                                </button>
                            }
                                .into_any()
                        }
                        PageItem::Gap => view! { <span class="pagination__gap">"…"</span> }.into_any(),
                    })
                    .collect::<Vec<_>>()
            }}
            <button
                class="btn pagination__step"
                disabled=move || page.get() >= total_pages.get()
                on:click=move |_| on_select.run(page.get_untracked() + 1)
            >
                "›"
            </button>
            <button class="btn btn--primary pagination__show-all" on:click=move |_| on_show_all.run(())>
                "Show full list"
            </button>
        </nav>
    }
}
