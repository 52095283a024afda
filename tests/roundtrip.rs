use xtree::Xtree;

#[test]
fn roundtrip_elements() {
    let mut xtree = Xtree::new();
    let xml = r#"<root><a x="1"/><b><c/><d y="2"/></b></root>"#;
    let first = xtree.parse(xml).unwrap();
    let output = xtree.to_string(first).unwrap();

    let second = xtree.parse(&output).unwrap();
    assert!(xtree.compare(first, second));
}

#[test]
fn roundtrip_is_stable() {
    let mut xtree = Xtree::new();
    let first = xtree.parse(r#"<root><a/><b><c/></b></root>"#).unwrap();
    let output = xtree.to_string(first).unwrap();

    let second = xtree.parse(&output).unwrap();
    assert_eq!(xtree.to_string(second).unwrap(), output);
}

#[test]
fn roundtrip_attributes_keep_escaped_form() {
    let mut xtree = Xtree::new();
    let first = xtree.parse(r#"<root a="x &amp; y"/>"#).unwrap();
    let output = xtree.to_string(first).unwrap();
    assert_eq!(output, "<root a=\"x &amp; y\"/>\n");

    let second = xtree.parse(&output).unwrap();
    assert!(xtree.compare(first, second));
}
