//! Bistro
//!
//! Cart state, rendering model and order submission for the Bistro ordering page.

pub mod cart;
pub mod categories;
pub mod fixtures;
pub mod menu;
pub mod notifications;
pub mod order;
pub mod prelude;
pub mod pricing;
pub mod settings;
pub mod storefront;
pub mod summary;
