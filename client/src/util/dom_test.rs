#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn capture_has_no_focus_outside_browser() {
    assert!(FocusReturn::capture().is_none());
}

#[test]
fn location_search_is_empty_outside_browser() {
    assert_eq!(location_search(), "");
}

#[test]
fn selector_targets_class_and_attribute() {
    assert_eq!(open_gallery_selector(), ".open-gallery[data-nome]");
}

#[test]
fn entity_name_trims_and_rejects_blank() {
    assert_eq!(entity_name(Some("  Tikuna ".to_owned())).as_deref(), Some("Tikuna"));
    assert_eq!(entity_name(Some("   ".to_owned())), None);
    assert_eq!(entity_name(None), None);
}
