use std::rc::Rc;

use dioxus::prelude::UnboundedSender;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::menu::ListenerHost;

const SCROLL: &str = "scroll";

/// Vertical offset, in CSS pixels, past which the navbar is drawn condensed
pub const SCROLLED_OFFSET: f64 = 12.0;

pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > SCROLLED_OFFSET
}

/// Last scrolled/not-scrolled state seen, so only transitions are reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    scrolled: bool,
}

impl ScrollState {
    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Returns the new state when `offset_y` crosses the threshold.
    pub fn observe(&mut self, offset_y: f64) -> Option<bool> {
        let next = is_scrolled(offset_y);
        if next == self.scrolled {
            return None;
        }
        self.scrolled = next;
        Some(next)
    }
}

type ScrollCallback = Closure<dyn FnMut(web_sys::Event)>;

/// Window `scroll` listener for the navbar. Transitions are forwarded over
/// `events`; scroll events that stay on the same side of the threshold are
/// dropped in the callback.
#[derive(Clone)]
pub struct WindowScrollHost {
    callback: Rc<ScrollCallback>,
}

impl WindowScrollHost {
    pub fn new(events: UnboundedSender<bool>) -> Self {
        let mut state = ScrollState::default();

        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            let Some(offset_y) = web_sys::window().and_then(|window| window.scroll_y().ok()) else {
                return;
            };
            if let Some(scrolled) = state.observe(offset_y) {
                if events.unbounded_send(scrolled).is_err() {
                    tracing::debug!("Navbar is gone; dropping scroll update");
                }
            }
        });

        Self {
            callback: Rc::new(callback),
        }
    }
}

impl ListenerHost for WindowScrollHost {
    type Handle = ();

    fn attach(&self) {
        let Some(window) = web_sys::window() else { return; };
        let function: &js_sys::Function = (*self.callback).as_ref().unchecked_ref();
        if let Err(e) = window.add_event_listener_with_callback(SCROLL, function) {
            tracing::warn!("Failed to attach scroll listener: {:?}", e);
        }
    }

    fn detach(&self, _handle: ()) {
        let Some(window) = web_sys::window() else { return; };
        let function: &js_sys::Function = (*self.callback).as_ref().unchecked_ref();
        if let Err(e) = window.remove_event_listener_with_callback(SCROLL, function) {
            tracing::warn!("Failed to detach scroll listener: {:?}", e);
        } else {
            tracing::debug!("Scroll listener detached");
        }
    }
}
