use super::*;

#[test]
fn default_box_matches_centered_layout() {
    let style = BoxLayout::default().style().unwrap();
    assert_eq!(
        style,
        "width: 80%; max-width: 800px; margin: 0 auto; padding-top: 8rem; padding-bottom: 8rem"
    );
}

#[test]
fn empty_box_has_no_style_or_class() {
    let container = Container::Boxed(BoxLayout::empty());
    assert_eq!(container.style(), None);
    assert_eq!(container.class(), None);
}

#[test]
fn box_only_emits_set_parameters() {
    let layout = BoxLayout { padding: Some("1rem".to_owned()), ..BoxLayout::empty() };
    assert_eq!(layout.style().as_deref(), Some("padding: 1rem"));
}

#[test]
fn boxed_container_exposes_class_and_style() {
    let container = Container::default();
    assert_eq!(container.class(), Some("content"));
    assert!(container.style().unwrap().contains("max-width: 800px"));
}

#[test]
fn plain_container_has_class_only() {
    let container = Container::plain("layout");
    assert_eq!(container.class(), Some("layout"));
    assert_eq!(container.style(), None);
}

#[test]
fn vertical_padding_follows_padding_shorthand() {
    let layout = BoxLayout {
        padding: Some("1rem".to_owned()),
        padding_vertical: Some("2rem".to_owned()),
        ..BoxLayout::empty()
    };
    assert_eq!(
        layout.style().as_deref(),
        Some("padding: 1rem; padding-top: 2rem; padding-bottom: 2rem")
    );
}

#[test]
fn plain_with_blank_class_fails_validation() {
    assert_eq!(Container::plain("  ").validate(), Err(ShellError::EmptyContainerClass));
    assert_eq!(Container::plain("layout").validate(), Ok(()));
    assert_eq!(Container::default().validate(), Ok(()));
}

#[test]
fn container_deserializes_both_variants() {
    let boxed: Container = serde_json::from_str(r#"{"kind":"boxed","width":"50%"}"#).unwrap();
    let Container::Boxed(layout) = boxed else {
        panic!("expected boxed");
    };
    assert_eq!(layout.width.as_deref(), Some("50%"));
    assert_eq!(layout.max_width.as_deref(), Some("800px"));

    let plain: Container = serde_json::from_str(r#"{"kind":"plain","class":"wrap"}"#).unwrap();
    assert_eq!(plain, Container::plain("wrap"));
}

#[test]
fn explicit_null_unsets_a_box_field() {
    let boxed: Container = serde_json::from_str(r#"{"kind":"boxed","padding_vertical":null}"#).unwrap();
    assert_eq!(boxed.style().as_deref(), Some("width: 80%; max-width: 800px; margin: 0 auto"));
}
