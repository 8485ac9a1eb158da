use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
use std::{sync::OnceLock, time::Instant};

use bistro::storefront::Storefront;
use leptos::{prelude::*, task};

/// Time since page load.
#[cfg(target_arch = "wasm32")]
pub fn now() -> Duration {
    let elapsed_ms = web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0)
        .max(0.0);

    Duration::from_secs_f64(elapsed_ms / 1_000.0)
}

/// Time since first use.
#[cfg(not(target_arch = "wasm32"))]
pub fn now() -> Duration {
    static ORIGIN: OnceLock<Instant> = OnceLock::new();

    ORIGIN.get_or_init(Instant::now).elapsed()
}

/// Remove the notifications raised just now once their lifetime is over.
///
/// Each call owns one timer, so notifications raised at different moments
/// leave the screen independently.
pub fn schedule_expiry(storefront: RwSignal<Storefront>) {
    let ttl = storefront.with_untracked(|storefront| storefront.notifications().ttl());

    task::spawn_local(async move {
        wait_for_timeout(ttl).await;

        storefront.update(|storefront| {
            storefront.expire_notifications(now());
        });
    });
}

fn timeout_ms(delay: Duration) -> i32 {
    i32::try_from(delay.as_millis()).unwrap_or(i32::MAX)
}

#[cfg(target_arch = "wasm32")]
async fn wait_for_timeout(delay: Duration) {
    use js_sys::{Function, Promise};
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};
    use wasm_bindgen_futures::JsFuture;

    let delay_ms = timeout_ms(delay);

    let mut executor = move |resolve: Function, _reject: Function| {
        let Some(window) = web_sys::window() else {
            let _ = resolve.call0(&JsValue::NULL);
            return;
        };

        let callback = Closure::once_into_js(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });

        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms,
        );
    };

    let promise = Promise::new(&mut executor);
    let _ = JsFuture::from(promise).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn wait_for_timeout(delay: Duration) {
    tracing::trace!(delay_ms = timeout_ms(delay), "timers are immediate off the browser");

    task::tick().await;
}
