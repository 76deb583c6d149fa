use stockseed_core::{Archetype, Catalog, Error, PriceRange, validate_catalog};

fn archetype(category: &str) -> Archetype {
    Archetype {
        category: category.to_string(),
        manufacturers: vec!["Netgear".to_string(), "TP-Link".to_string()],
        models: vec!["Nighthawk".to_string(), "Archer".to_string()],
        price_range: PriceRange::new(60.0, 400.0),
        description: "Wi-Fi router".to_string(),
    }
}

#[test]
fn builtin_catalog_is_valid() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.len(), 10);
    validate_catalog(&catalog).expect("builtin catalog validates");

    for archetype in &catalog.archetypes {
        assert_eq!(archetype.manufacturers.len(), 8, "{}", archetype.category);
        assert_eq!(archetype.models.len(), 8, "{}", archetype.category);
    }

    let laptop = catalog.archetype("Laptop").expect("laptop archetype");
    assert_eq!(laptop.price_range, PriceRange::new(800.0, 3000.0));
}

#[test]
fn empty_catalog_is_rejected() {
    let result = validate_catalog(&Catalog::new(Vec::new()));
    assert!(matches!(result, Err(Error::InvalidCatalog(_))));
}

#[test]
fn duplicate_category_is_rejected() {
    let catalog = Catalog::new(vec![archetype("Router"), archetype("Router")]);
    let err = validate_catalog(&catalog).expect_err("duplicate category");
    assert!(err.to_string().contains("duplicate category: Router"));
}

#[test]
fn empty_model_list_is_rejected() {
    let mut router = archetype("Router");
    router.models.clear();
    let err = validate_catalog(&Catalog::new(vec![router])).expect_err("empty models");
    assert!(err.to_string().contains("models list is empty"));
}

#[test]
fn blank_manufacturer_is_rejected() {
    let mut router = archetype("Router");
    router.manufacturers.push("  ".to_string());
    let result = validate_catalog(&Catalog::new(vec![router]));
    assert!(matches!(result, Err(Error::InvalidCatalog(_))));
}

#[test]
fn inverted_price_range_is_rejected() {
    let mut router = archetype("Router");
    router.price_range = PriceRange::new(500.0, 100.0);
    let err = validate_catalog(&Catalog::new(vec![router])).expect_err("inverted range");
    assert!(err.to_string().contains("exceeds maximum"));
}

#[test]
fn non_positive_price_is_rejected() {
    let mut router = archetype("Router");
    router.price_range = PriceRange::new(0.0, 100.0);
    assert!(validate_catalog(&Catalog::new(vec![router])).is_err());

    let mut router = archetype("Router");
    router.price_range = PriceRange::new(10.0, f64::INFINITY);
    assert!(validate_catalog(&Catalog::new(vec![router])).is_err());
}

#[test]
fn single_price_point_is_allowed() {
    let mut router = archetype("Router");
    router.price_range = PriceRange::new(99.99, 99.99);
    validate_catalog(&Catalog::new(vec![router])).expect("equal bounds validate");
}

#[test]
fn sub_cent_minimum_is_rejected() {
    let mut router = archetype("Router");
    router.price_range = PriceRange::new(0.001, 0.004);
    let err = validate_catalog(&Catalog::new(vec![router])).expect_err("sub-cent range");
    assert!(err.to_string().contains("below 0.01"));

    let mut router = archetype("Router");
    router.price_range = PriceRange::new(0.01, 0.02);
    validate_catalog(&Catalog::new(vec![router])).expect("one cent validates");
}
