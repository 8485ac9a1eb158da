use std::sync::Arc;

use bistro::{settings::Settings, storefront::Storefront};
use leptos::prelude::*;

use crate::checkout::submit_order;

pub(super) fn button_display(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

#[component]
pub(super) fn CartTotals(
    total: String,
    show_place_order: bool,
    storefront: RwSignal<Storefront>,
    settings: Arc<Settings>,
) -> impl IntoView {
    let submitting = move || storefront.with(Storefront::is_submitting);

    view! {
        <div class="order-summary">
            <p class="order-total-row">
                <span>"Total"</span>
                <span id="total-amount">{total}</span>
            </p>
            <button
                type="button"
                id="place-order"
                class="place-order"
                style:display=button_display(show_place_order)
                disabled=submitting
                on:click=move |_| submit_order(storefront, Arc::clone(&settings))
            >
                {move || if submitting() { "Placing order..." } else { "Place Order" }}
            </button>
            <button
                type="button"
                class="clear-order"
                style:display=button_display(show_place_order)
                on:click=move |_| storefront.update(Storefront::reset)
            >
                "Clear order"
            </button>
        </div>
    }
}
