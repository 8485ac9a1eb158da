//! Bundled menu fixture tests

use bistro::prelude::*;
use testresult::TestResult;

const MENU_YAML: &str = include_str!("../../../fixtures/menu/bistro.yml");
const SETTINGS_YAML: &str = include_str!("../../../fixtures/settings.yml");

#[test]
fn bundled_menu_loads_in_category_order() -> TestResult {
    let menu = load_menu(MENU_YAML)?;

    assert_eq!(
        menu.category_keys(),
        vec!["burgers", "sides", "drinks", "desserts"]
    );
    assert_eq!(menu.len(), 15);

    Ok(())
}

#[test]
fn bundled_menu_hides_unavailable_items() -> TestResult {
    let menu = load_menu(MENU_YAML)?;

    assert!(menu.item(ItemId(16)).is_none());

    Ok(())
}

#[test]
fn bundled_menu_prices_in_minor_units() -> TestResult {
    let menu = load_menu(MENU_YAML)?;

    let burger = menu.item(ItemId(3)).ok_or("missing bacon burger")?;

    assert_eq!(burger.name, "Bacon Burger");
    assert_eq!(burger.price_minor, 1099);
    assert_eq!(format_price(burger.price_minor), "$10.99");

    Ok(())
}

#[test]
fn bundled_settings_match_defaults() -> TestResult {
    let settings = Settings::from_yaml(SETTINGS_YAML)?;

    assert_eq!(settings, Settings::default());

    Ok(())
}
