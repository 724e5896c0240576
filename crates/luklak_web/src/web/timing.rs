use std::time::Duration;

use luklak::generation::Sleep;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// `setTimeout`-backed sleep for the simulated generation delay.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct TimeoutSleep;

impl Sleep for TimeoutSleep {
    async fn sleep(&self, duration: Duration) {
        let ms = duration.as_millis().min(i32::MAX as u128) as i32;
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            let scheduled = web_sys::window().is_some_and(|w| {
                w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                    .is_ok()
            });
            if !scheduled {
                let _ = resolve.call0(&JsValue::NULL);
            }
        });
        let _ = JsFuture::from(promise).await;
    }
}
