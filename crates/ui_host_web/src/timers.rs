//! `setTimeout`-backed timer service implementation.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use ui_core::{TimerHandle, TimerService};

#[derive(Debug, Clone, Copy, Default)]
/// Browser timer service backed by `window.setTimeout` / `window.clearTimeout`.
///
/// On non-wasm targets scheduling is inert: callbacks never fire and the returned
/// handle cancels nothing.
pub struct WebTimerService;

impl TimerService for WebTimerService {
    fn start(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                return TimerHandle(0);
            };
            let callback = Closure::once_into_js(callback);
            let handle = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.unchecked_ref(),
                    delay_ms as i32,
                )
                .unwrap_or(0);
            TimerHandle(handle)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (delay_ms, callback);
            TimerHandle(0)
        }
    }

    fn cancel(&self, handle: TimerHandle) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(handle.0);
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        let _ = handle;
    }
}
