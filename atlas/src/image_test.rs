use super::*;

#[test]
fn missing_url_starts_on_placeholder() {
    let slot = ImageSlot::new(None);
    assert_eq!(slot.src(), PLACEHOLDER_IMAGE);
    assert!(slot.is_placeholder());
}

#[test]
fn blank_url_is_treated_as_missing() {
    let slot = ImageSlot::new(Some("   "));
    assert!(slot.is_placeholder());
    assert_eq!(slot.original(), None);
}

#[test]
fn fail_swaps_once() {
    let mut slot = ImageSlot::new(Some("https://img.example/a.jpg"));
    assert_eq!(slot.src(), "https://img.example/a.jpg");
    assert!(slot.fail());
    assert_eq!(slot.src(), PLACEHOLDER_IMAGE);
    assert!(!slot.fail());
    assert_eq!(slot.original(), Some("https://img.example/a.jpg"));
}

#[test]
fn placeholder_failure_is_not_counted() {
    let mut slot = ImageSlot::new(None);
    assert!(!slot.fail());
}
