use bistro::storefront::Storefront;
use leptos::prelude::*;

/// Transient messages raised by the storefront.
#[component]
pub fn NotificationStack(
    /// Shared cart and notifications.
    storefront: RwSignal<Storefront>,
) -> impl IntoView {
    view! {
        <div class="notifications" role="status" aria-live="polite">
            <For
                each=move || storefront.with(|storefront| storefront.notifications().active().to_vec())
                key=|notification| notification.id
                children=|notification| {
                    view! { <div class="notification">{notification.message}</div> }
                }
            />
        </div>
    }
}
