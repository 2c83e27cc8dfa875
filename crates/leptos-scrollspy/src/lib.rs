//! Leptos ScrollSpy Utilities
//!
//! Tracks which section of a long page is near the top of the viewport.
//! Uses an IntersectionObserver with a shrunken root margin, so a section
//! only counts once its top has scrolled up under the sticky header.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Observer region, expressed as insets from the viewport edges
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpyOptions {
    /// Pixels cut from the top of the viewport (sticky header area)
    pub top_inset_px: u32,
    /// Percentage cut from the bottom of the viewport
    pub bottom_inset_percent: u32,
    /// Visible fraction required to count as intersecting
    pub threshold: f64,
}

impl Default for SpyOptions {
    fn default() -> Self {
        Self {
            top_inset_px: 100,
            bottom_inset_percent: 70,
            threshold: 0.0,
        }
    }
}

impl SpyOptions {
    /// CSS margin string for `IntersectionObserverInit.rootMargin`
    pub fn root_margin(&self) -> String {
        format!("-{}px 0px -{}% 0px", self.top_inset_px, self.bottom_inset_percent)
    }
}

/// Cancellable gate between the observer and its consumer.
///
/// Clones share one flag. Once cancelled, nothing is delivered again.
#[derive(Clone, Debug)]
pub struct Subscription {
    live: Arc<AtomicBool>,
}

impl Default for Subscription {
    fn default() -> Self {
        Self::new()
    }
}

impl Subscription {
    pub fn new() -> Self {
        Self {
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    pub fn cancel(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Run `f` only while live. Returns whether it ran.
    pub fn deliver(&self, f: impl FnOnce()) -> bool {
        if self.is_live() {
            f();
            true
        } else {
            false
        }
    }
}

/// A live viewport watch over a set of sections
pub struct ScrollSpy {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
    subscription: Subscription,
}

impl ScrollSpy {
    /// Observe every element whose id is in `section_ids`.
    ///
    /// `on_enter` receives the id of each section entering the region.
    /// Ids with no element in the document are skipped.
    pub fn watch<F>(
        section_ids: &[String],
        options: &SpyOptions,
        subscription: Subscription,
        on_enter: F,
    ) -> Result<Self, JsValue>
    where
        F: Fn(String) + 'static,
    {
        let gate = subscription.clone();
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                if !gate.is_live() {
                    // Torn down but the browser still had a batch queued
                    observer.disconnect();
                    return;
                }
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        let id = entry.target().id();
                        gate.deliver(|| on_enter(id));
                    }
                }
            },
        );

        let init = web_sys::IntersectionObserverInit::new();
        init.set_root_margin(&options.root_margin());
        init.set_threshold(&JsValue::from_f64(options.threshold));
        let observer =
            web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        let document = web_sys::window()
            .and_then(|win| win.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let mut watched = 0usize;
        for id in section_ids {
            if let Some(el) = document.get_element_by_id(id) {
                observer.observe(&el);
                watched += 1;
            } else {
                log::warn!("scrollspy: no element with id '{}'", id);
            }
        }
        log::info!("scrollspy: watching {} of {} sections", watched, section_ids.len());

        Ok(Self {
            observer,
            _callback: callback,
            subscription,
        })
    }

    /// Cancel delivery and stop observing all sections
    pub fn disconnect(&self) {
        self.subscription.cancel();
        self.observer.disconnect();
    }
}

impl Drop for ScrollSpy {
    fn drop(&mut self) {
        self.disconnect();
    }
}

/// Install a scrollspy once the current component is mounted.
///
/// The watch is torn down when the owning reactive scope is cleaned up.
/// If the browser has no IntersectionObserver the failure is logged and
/// the returned subscription is already cancelled.
pub fn use_scrollspy<F>(section_ids: Vec<String>, options: SpyOptions, on_enter: F) -> Subscription
where
    F: Fn(String) + Clone + 'static,
{
    let subscription = Subscription::new();
    let spy = StoredValue::new_local(None::<ScrollSpy>);

    let sub = subscription.clone();
    Effect::new(move |_| {
        if spy.with_value(|s| s.is_some()) || !sub.is_live() {
            return;
        }
        match ScrollSpy::watch(&section_ids, &options, sub.clone(), on_enter.clone()) {
            Ok(watch) => spy.set_value(Some(watch)),
            Err(err) => {
                log::warn!("scrollspy unavailable, falling back to navigation only: {:?}", err);
                sub.cancel();
            }
        }
    });

    let sub = subscription.clone();
    on_cleanup(move || {
        sub.cancel();
        // Dropping the spy disconnects the observer
        let _ = spy.try_update_value(|s| s.take());
        log::info!("scrollspy: torn down");
    });

    subscription
}

/// Document offset to scroll to so an element sits just below the header
pub fn scroll_target(element_top: f64, page_y_offset: f64, header_offset: f64) -> f64 {
    element_top + page_y_offset - header_offset
}

/// Smoothly scroll the window so the element with `id` sits below the header.
/// Does nothing if the element is missing.
pub fn scroll_to_section(id: &str, header_offset: f64) {
    let Some(win) = web_sys::window() else { return };
    let Some(el) = win.document().and_then(|doc| doc.get_element_by_id(id)) else {
        log::warn!("scroll_to_section: no element with id '{}'", id);
        return;
    };
    let top = el.get_bounding_client_rect().top();
    let page_y = win.page_y_offset().unwrap_or(0.0);

    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(scroll_target(top, page_y, header_offset));
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&opts);
}

/// Horizontal extent of an element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub left: f64,
    pub right: f64,
}

impl Span {
    /// True if `self` lies entirely inside `outer`
    pub fn fully_within(&self, outer: &Span) -> bool {
        self.left >= outer.left && self.right <= outer.right
    }
}

fn span_of(el: &web_sys::Element) -> Span {
    let rect = el.get_bounding_client_rect();
    Span {
        left: rect.left(),
        right: rect.right(),
    }
}

/// Center the control `control_id` in the scrolling strip `strip_id`,
/// unless it is already fully visible there.
pub fn reveal_in_strip(control_id: &str, strip_id: &str) {
    let Some(doc) = web_sys::window().and_then(|win| win.document()) else { return };
    let (Some(control), Some(strip)) = (doc.get_element_by_id(control_id), doc.get_element_by_id(strip_id)) else {
        return;
    };
    if span_of(&control).fully_within(&span_of(&strip)) {
        return;
    }
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    opts.set_block(web_sys::ScrollLogicalPosition::Nearest);
    opts.set_inline(web_sys::ScrollLogicalPosition::Center);
    control.scroll_into_view_with_scroll_into_view_options(&opts);
}
