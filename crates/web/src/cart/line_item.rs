use bistro::{menu::ItemId, storefront::Storefront, summary::CartLineView};
use leptos::prelude::*;
use tracing::debug;

pub(super) fn apply_quantity(storefront: &mut Storefront, id: ItemId, quantity: i64) {
    if let Err(error) = storefront.set_quantity(id, quantity) {
        debug!(%error, "stale quantity control");
    }
}

#[component]
fn QuantityButton(
    id: ItemId,
    target: i64,
    label: String,
    symbol: &'static str,
    storefront: RwSignal<Storefront>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="quantity-button"
            aria-label=label
            on:click=move |_| {
                storefront.update(|storefront| apply_quantity(storefront, id, target));
            }
        >
            {symbol}
        </button>
    }
}

#[component]
pub(super) fn CartLine(line: CartLineView, storefront: RwSignal<Storefront>) -> impl IntoView {
    let decrement_label = format!("Remove one {}", line.name);
    let increment_label = format!("Add one more {}", line.name);

    view! {
        <div class="order-item">
            <div class="order-item-details">
                <span class="order-item-name">{line.name}</span>
                <span class="order-item-price">{line.line_total}</span>
            </div>
            <div class="order-item-controls">
                <QuantityButton
                    id=line.id
                    target=line.decrement_to
                    label=decrement_label
                    symbol="-"
                    storefront=storefront
                />
                <span class="order-item-quantity">{line.quantity}</span>
                <QuantityButton
                    id=line.id
                    target=line.increment_to
                    label=increment_label
                    symbol="+"
                    storefront=storefront
                />
            </div>
        </div>
    }
}
