use dioxus::prelude::*;

/// Follows `input`, but only after it has stopped changing for `delay_ms`.
///
/// Every change cancels the pending timer task and starts a new one, so a
/// burst of keystrokes settles into a single update.
pub fn use_debounced(input: Signal<String>, delay_ms: i32) -> ReadOnlySignal<String> {
    let mut settled = use_signal(|| input.peek().clone());
    let mut pending = use_signal(|| None::<Task>);

    use_effect(move || {
        let value = input();
        if let Some(task) = pending.write().take() {
            task.cancel();
        }
        let task = spawn(async move {
            sleep_ms(delay_ms).await;
            if *settled.peek() != value {
                settled.set(value);
            }
            pending.set(None);
        });
        pending.set(Some(task));
    });

    settled.into()
}

/// Resolves after `ms` milliseconds of browser time.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: i32) {
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;

    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().map(|window| {
            window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
        });
        if !matches!(scheduled, Some(Ok(_))) {
            tracing::warn!("Could not schedule a {}ms timer; resolving immediately", ms);
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    if let Err(e) = JsFuture::from(promise).await {
        tracing::warn!("Timer promise rejected: {:?}", e);
    }
}

/// Native renderers have no browser timer; the wait is skipped.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(_ms: i32) {}
