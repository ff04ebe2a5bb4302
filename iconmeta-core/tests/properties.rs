use proptest::prelude::*;

use iconmeta_core::category::{category_definitions, classify};
use iconmeta_core::codepoint::{format_hex, parse_hex};
use iconmeta_core::keywords::generate_keywords;

#[test]
fn documented_example_round_trips() {
    assert_eq!(parse_hex("E72B"), Some(0xE72B));
    assert_eq!(format_hex(0xE72B), "E72B");
}

proptest! {
    #[test]
    fn hex_round_trips(cp in 1u32..0x0011_0000) {
        let hex = format_hex(cp);
        prop_assert_eq!(parse_hex(&hex), Some(cp));
        prop_assert_eq!(format_hex(parse_hex(&hex).unwrap()), hex);
    }

    #[test]
    fn classifier_is_pure_and_always_defined(cp in 0xE000u32..0xFA00, name in "[A-Za-z0-9_]{1,24}") {
        let hex = format_hex(cp);
        let first = classify(&hex, &name);
        prop_assert_eq!(first, classify(&hex, &name));
        prop_assert!(category_definitions().iter().any(|def| def.key == first));
    }

    #[test]
    fn keywords_carry_name_and_category(cp in 0xE700u32..0xF900, name in "[A-Z][a-z]{1,8}([A-Z][a-z]{1,8}){0,3}") {
        let hex = format_hex(cp);
        let category = classify(&hex, &name);
        let kws = generate_keywords(&name, &hex, category);

        prop_assert!(kws.contains(&name.to_lowercase()));
        prop_assert!(kws.contains(&category.key().to_string()));
        let token = format!("u{}", hex.to_lowercase());
        prop_assert!(kws.contains(&token));
        prop_assert!(kws.windows(2).all(|w| w[0] < w[1]));
    }
}
