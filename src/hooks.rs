use wasm_bindgen::JsCast;
use web_sys::{window, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::anchor::fragment_selector;

/// Scrolls smoothly to in-page targets of `a[href^="#"]` links instead of
/// jumping. Links whose fragment matches nothing keep the default behavior.
#[hook]
pub fn use_smooth_anchor_scroll() {
    use_event_with_window("click", move |e: MouseEvent| {
        let link = e
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("a[href^=\"#\"]").ok().flatten());
        let Some(link) = link else {
            return;
        };
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let Some(selector) = fragment_selector(&href) else {
            return;
        };
        // An id that is not a valid selector is an error here, not a panic.
        let target = window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(selector).ok().flatten());
        if let Some(target) = target {
            e.prevent_default();
            let mut options = ScrollIntoViewOptions::new();
            options.behavior(ScrollBehavior::Smooth);
            options.block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });
}
