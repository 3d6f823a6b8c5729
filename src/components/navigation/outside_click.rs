use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::UnboundedSender;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::menu::{ListenerHost, PointerTarget};

const POINTER_DOWN: &str = "pointerdown";

type PointerCallback = Closure<dyn FnMut(web_sys::Event)>;

/// Document-level `pointerdown` listener for one dropdown instance.
///
/// The JS callback is created once and reused for every attach, so detaching
/// removes exactly the function that was added. Classified pointer targets are
/// forwarded over `events` to the component, which applies them inside the
/// Dioxus runtime.
#[derive(Clone)]
pub struct DocumentPointerHost {
    root: Rc<RefCell<Option<web_sys::Element>>>,
    callback: Rc<PointerCallback>,
}

impl DocumentPointerHost {
    pub fn new(events: UnboundedSender<PointerTarget>) -> Self {
        let root: Rc<RefCell<Option<web_sys::Element>>> = Rc::new(RefCell::new(None));
        let root_for_callback = root.clone();

        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let target = classify(root_for_callback.borrow().as_ref(), &event);
            if events.unbounded_send(target).is_err() {
                tracing::debug!("Catalog menu is gone; dropping pointer event");
            }
        });

        Self {
            root,
            callback: Rc::new(callback),
        }
    }

    /// Remember the rendered menu root, from its `onmounted` event.
    pub fn set_root(&self, element: web_sys::Element) {
        *self.root.borrow_mut() = Some(element);
    }

    fn document() -> Option<web_sys::Document> {
        web_sys::window().and_then(|window| window.document())
    }
}

impl ListenerHost for DocumentPointerHost {
    type Handle = ();

    fn attach(&self) {
        let Some(document) = Self::document() else { return; };
        let function: &js_sys::Function = (*self.callback).as_ref().unchecked_ref();
        if let Err(e) = document.add_event_listener_with_callback(POINTER_DOWN, function) {
            tracing::warn!("Failed to attach outside-click listener: {:?}", e);
        } else {
            tracing::debug!("Outside-click listener attached");
        }
    }

    fn detach(&self, _handle: ()) {
        let Some(document) = Self::document() else { return; };
        let function: &js_sys::Function = (*self.callback).as_ref().unchecked_ref();
        if let Err(e) = document.remove_event_listener_with_callback(POINTER_DOWN, function) {
            tracing::warn!("Failed to detach outside-click listener: {:?}", e);
        } else {
            tracing::debug!("Outside-click listener detached");
        }
    }
}

/// `Inside` only when the mounted root contains the event target. With no root
/// yet (a press before `onmounted` fired) the press counts as `Outside`.
fn classify(root: Option<&web_sys::Element>, event: &web_sys::Event) -> PointerTarget {
    let target = event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok());

    PointerTarget::from_containment(root.map(|root| root.contains(target.as_ref())))
}
