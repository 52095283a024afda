use xtree::{Error, Xtree};

#[test]
fn test_append_element_and_text() {
    let mut xtree = Xtree::new();
    let root = xtree.new_root();
    let doc = xtree.append_element(root, "doc").unwrap();
    xtree.append_text(doc, "hello").unwrap();
    assert_eq!(xtree.to_string(root).unwrap(), "<doc>\n\thello\n</doc>\n");
}

#[test]
fn test_append_root_under_element_fails() {
    let mut xtree = Xtree::new();
    let root = xtree.new_root();
    let doc = xtree.append_element(root, "doc").unwrap();
    let other_root = xtree.new_root();
    let err = xtree.append(doc, other_root).unwrap_err();
    assert!(matches!(err, Error::InvalidOperation(_)));
}

#[test]
fn test_append_under_text_fails() {
    let mut xtree = Xtree::new();
    let root = xtree.new_root();
    let doc = xtree.append_element(root, "doc").unwrap();
    let text = xtree.append_text(doc, "x").unwrap();
    let stray = xtree.new_element("stray");
    let err = xtree.append(text, stray).unwrap_err();
    assert!(matches!(err, Error::InvalidOperation(_)));
}

#[test]
fn test_detach_and_reattach() {
    let mut xtree = Xtree::new();
    let root = xtree.parse(r#"<doc><a><b/></a><c/></doc>"#).unwrap();
    let doc = xtree.document_element(root).unwrap();
    let a = xtree.first_child(doc).unwrap();
    let c = xtree.last_child(doc).unwrap();
    let b = xtree.first_child(a).unwrap();

    let b = xtree.detach(b).unwrap();
    xtree.append(c, b).unwrap();

    assert_eq!(
        xtree.to_string(root).unwrap(),
        "<doc>\n\t<a/>\n\t<c>\n\t\t<b/>\n\t</c>\n</doc>\n"
    );
}

#[test]
fn test_detach_root_fails() {
    let mut xtree = Xtree::new();
    let root = xtree.parse(r#"<doc/>"#).unwrap();
    let err = xtree.detach(root).unwrap_err();
    assert!(matches!(err, Error::InvalidOperation(_)));
}

#[test]
fn test_remove_subtree() {
    let mut xtree = Xtree::new();
    let root = xtree.parse(r#"<doc><a><b/></a><c/></doc>"#).unwrap();
    let doc = xtree.document_element(root).unwrap();
    let a = xtree.first_child(doc).unwrap();
    xtree.remove(a);
    let children: Vec<_> = xtree.children(doc).collect();
    assert_eq!(children.len(), 1);
    assert_eq!(xtree.node_name(children[0]), Some("c"));
}

#[test]
fn test_normalize_merges_adjacent_text() {
    let mut xtree = Xtree::new();
    let root = xtree.new_root();
    let doc = xtree.append_element(root, "doc").unwrap();
    xtree.append_text(doc, "a").unwrap();
    xtree.append_text(doc, "b").unwrap();
    xtree.append_text(doc, "c").unwrap();
    xtree.normalize(doc);
    assert_eq!(xtree.children(doc).count(), 1);
    assert_eq!(xtree.get_text(doc), Some("abc"));
}

#[test]
fn test_normalize_is_idempotent() {
    let mut xtree = Xtree::new();
    let root = xtree.new_root();
    let doc = xtree.append_element(root, "doc").unwrap();
    xtree.append_text(doc, "a").unwrap();
    xtree.append_text(doc, "b").unwrap();
    xtree.normalize(doc);
    let once = xtree.to_string(root).unwrap();
    xtree.normalize(doc);
    assert_eq!(xtree.to_string(root).unwrap(), once);
}

#[test]
fn test_normalize_keeps_elements_apart() {
    let mut xtree = Xtree::new();
    let root = xtree.new_root();
    let doc = xtree.append_element(root, "doc").unwrap();
    xtree.append_text(doc, "a").unwrap();
    xtree.append_element(doc, "sep").unwrap();
    xtree.append_text(doc, "b").unwrap();
    xtree.append_text(doc, "c").unwrap();
    xtree.normalize(doc);
    let children: Vec<_> = xtree.children(doc).collect();
    assert_eq!(children.len(), 3);
    assert_eq!(xtree.text_str(children[0]), Some("a"));
    assert_eq!(xtree.text_str(children[2]), Some("bc"));
}

#[test]
fn test_attribute_overwrite() {
    let mut xtree = Xtree::new();
    let root = xtree.parse(r#"<doc a="1"/>"#).unwrap();
    let doc = xtree.document_element(root).unwrap();
    xtree.element_mut(doc).unwrap().set_attribute("a", "2");
    let element = xtree.element(doc).unwrap();
    assert_eq!(element.get_attribute("a"), Some("2"));
    assert_eq!(element.attributes().len(), 1);
}

#[test]
fn test_attribute_remove() {
    let mut xtree = Xtree::new();
    let root = xtree.parse(r#"<doc a="1" b="2"/>"#).unwrap();
    let doc = xtree.document_element(root).unwrap();
    xtree.element_mut(doc).unwrap().remove_attribute("a");
    let element = xtree.element(doc).unwrap();
    assert_eq!(element.get_attribute("a"), None);
    assert_eq!(element.get_attribute("b"), Some("2"));
}

#[test]
fn test_compare_trees() {
    let mut xtree = Xtree::new();
    let one = xtree.parse(r#"<doc><a x="1">t</a></doc>"#).unwrap();
    let two = xtree.parse(r#"<doc><a x="1">t</a></doc>"#).unwrap();
    let three = xtree.parse(r#"<doc><a x="2">t</a></doc>"#).unwrap();
    assert!(xtree.compare(one, two));
    assert!(!xtree.compare(one, three));
}
