//! Bistro prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartItem, QuantityChange},
    categories::CategoryTabs,
    fixtures::{FixtureError, menu::load_menu},
    menu::{ItemId, Menu, MenuCategory, MenuItem},
    notifications::{NOTIFICATION_TTL, Notification, NotificationId, Notifications},
    order::{HttpOrderClient, OrderClient, OrderError, OrderLine, OrderPayload, OrderResponse},
    pricing::format_price,
    settings::Settings,
    storefront::{EMPTY_ORDER_MESSAGE, ORDER_FAILED_MESSAGE, Storefront},
    summary::{CartLineView, CartSummary, EMPTY_CART_LINES},
};
