//! Markup-to-element-to-markup flows through the public facade.

mod common;

use burin::{
    AttrValue, DomError, Element, MarkupDocument, PathData, Style, TransformList,
    XLINK_NAMESPACE,
};
use common::TestResult;

#[test]
fn reads_a_document_into_an_element_tree() -> TestResult {
    common::init_logging();

    let root = Element::from_markup_text(common::fixtures::sample_document())?;
    assert_eq!(root.name(), "svg");
    assert_eq!(root.children().len(), 1);

    let group = &root.children()[0];
    assert_eq!(group.name(), "g");
    // style and transform are typed at read time, the rest stays raw.
    assert!(group.attributes().get("style").unwrap().as_style().is_some());
    assert!(
        group
            .attributes()
            .get("transform")
            .unwrap()
            .as_transform()
            .is_some()
    );

    let path = &group.children()[0];
    assert_eq!(path.attributes().get("d").unwrap().as_raw(), Some("M 0 0 10 10 20 20"));

    let use_ref = &group.children()[1];
    assert_eq!(
        use_ref.attributes().get("xlink:href").unwrap().as_raw(),
        Some("#marker")
    );
    Ok(())
}

#[test]
fn malformed_style_fails_with_the_collaborator_error() {
    let err = Element::from_markup_text(common::fixtures::document_with_bad_style()).unwrap_err();
    assert!(matches!(err, DomError::Style(_)));
}

#[test]
fn writes_the_tree_back_with_namespace_routing() -> TestResult {
    common::init_logging();

    let root = Element::from_markup_text(common::fixtures::sample_document())?;
    let mut doc = MarkupDocument::new();
    root.write_markup(&mut doc, None);

    let svg = doc.root().unwrap();
    let group = &svg.children()[0];
    assert_eq!(group.attribute("transform"), Some("translate(10 20)"));
    assert_eq!(group.attribute("style"), Some("fill:none; stroke:black"));

    let use_node = &group.children()[1];
    assert_eq!(use_node.namespaced_attribute(XLINK_NAMESPACE, "href"), Some("#marker"));
    assert_eq!(use_node.attribute("xlink:href"), None);

    let xml = doc.to_xml_string();
    assert!(xml.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg""#));
    assert!(xml.contains(r#"xmlns:xlink="http://www.w3.org/1999/xlink""#));
    assert!(xml.contains(r##"<use xlink:href="#marker" x="5" y="5"/>"##));
    Ok(())
}

#[test]
fn document_round_trip_is_stable() -> TestResult {
    let root = Element::from_markup_text(common::fixtures::sample_document())?;
    let mut doc = MarkupDocument::new();
    root.write_markup(&mut doc, None);
    let first = doc.to_xml_string();

    let reread = Element::from_markup_text(&first)?;
    let mut doc = MarkupDocument::new();
    reread.write_markup(&mut doc, None);
    assert_eq!(doc.to_xml_string(), first);
    Ok(())
}

#[test]
fn lazy_transform_materializes_on_a_fresh_element() -> TestResult {
    let mut element = Element::new("g");
    assert!(!element.attributes().contains("transform"));

    let transform = element.attributes_mut().typed::<TransformList>("transform")?;
    assert!(transform.is_empty());
    // The default instance is now persisted in the store.
    assert!(element.attributes().contains("transform"));
    Ok(())
}

#[test]
fn lazy_style_materializes_on_a_fresh_element() -> TestResult {
    let mut element = Element::new("rect");
    let style = element.attributes_mut().typed::<Style>("style")?;
    style.set("fill", "red");

    assert_eq!(element.attributes().get_text("style"), Some("fill:red".to_string()));
    Ok(())
}

#[test]
fn raw_path_attribute_coerces_lazily_and_reserializes_canonically() -> TestResult {
    let root = Element::from_markup_text(common::fixtures::sample_document())?;
    let mut group = root.children()[0].clone();
    let path_element = &mut group.children_mut()[0];

    let path = path_element.attributes_mut().typed::<PathData>("d")?;
    assert_eq!(path.len(), 3);

    let mut doc = MarkupDocument::new();
    path_element.write_markup(&mut doc, None);
    assert_eq!(doc.root().unwrap().attribute("d"), Some("M 0 0 10 10 20 20 "));
    Ok(())
}

#[test]
fn node_level_read_works_on_a_caller_parsed_document() -> TestResult {
    let text = r#"<svg xmlns="http://www.w3.org/2000/svg"><rect width="10" height="20"/></svg>"#;
    let document = roxmltree::Document::parse(text)?;
    let rect_node = document
        .root_element()
        .children()
        .find(|c| c.is_element())
        .unwrap();

    let rect = Element::from_markup(rect_node)?;
    assert_eq!(rect.name(), "rect");
    let values: Vec<(String, String)> = rect
        .attributes()
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_text()))
        .collect();
    assert_eq!(
        values,
        vec![
            ("width".to_string(), "10".to_string()),
            ("height".to_string(), "20".to_string()),
        ]
    );
    Ok(())
}

#[test]
fn store_values_expose_a_recognizable_identity() -> TestResult {
    let mut element = Element::new("g");
    element.read_markup_attribute("style", "fill:red")?;

    match element.attributes().get("style").unwrap() {
        AttrValue::Style(style) => assert_eq!(style.get("fill"), Some("red")),
        other => panic!("expected a style value, got {other:?}"),
    }
    Ok(())
}
