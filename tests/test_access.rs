use xtree::{NodeEdge, Xtree};

#[test]
fn test_navigation() {
    let mut xtree = Xtree::new();
    let root = xtree.parse(r#"<doc><a/><b/><c/></doc>"#).unwrap();
    let doc = xtree.document_element(root).unwrap();
    let a = xtree.first_child(doc).unwrap();
    let c = xtree.last_child(doc).unwrap();
    let b = xtree.next_sibling(a).unwrap();

    assert_eq!(xtree.node_name(a), Some("a"));
    assert_eq!(xtree.node_name(b), Some("b"));
    assert_eq!(xtree.node_name(c), Some("c"));
    assert_eq!(xtree.previous_sibling(c), Some(b));
    assert_eq!(xtree.next_sibling(c), None);
    assert_eq!(xtree.parent(a), Some(doc));
    assert_eq!(xtree.parent(root), None);
}

#[test]
fn test_root_and_ancestors() {
    let mut xtree = Xtree::new();
    let root = xtree.parse(r#"<doc><a><b/></a></doc>"#).unwrap();
    let b = xtree.select(root, "/doc/a/b").unwrap();
    assert_eq!(xtree.root(b), root);
    let names: Vec<_> = xtree
        .ancestors(b)
        .filter_map(|n| xtree.node_name(n))
        .collect();
    assert_eq!(names, ["b", "a", "doc"]);
}

#[test]
fn test_descendants_in_document_order() {
    let mut xtree = Xtree::new();
    let root = xtree.parse(r#"<doc><a><b/></a><c/></doc>"#).unwrap();
    let names: Vec<_> = xtree
        .descendants(root)
        .filter_map(|n| xtree.node_name(n))
        .collect();
    assert_eq!(names, ["doc", "a", "b", "c"]);
}

#[test]
fn test_traverse_edges() {
    let mut xtree = Xtree::new();
    let root = xtree.parse(r#"<doc><a/></doc>"#).unwrap();
    let doc = xtree.document_element(root).unwrap();
    let a = xtree.first_child(doc).unwrap();
    let edges: Vec<_> = xtree.traverse(doc).collect();
    assert_eq!(
        edges,
        [
            NodeEdge::Start(doc),
            NodeEdge::Start(a),
            NodeEdge::End(a),
            NodeEdge::End(doc),
        ]
    );
}

#[test]
fn test_get_text() {
    let mut xtree = Xtree::new();
    let root = xtree.parse(r#"<doc><a>hello</a><b><c/></b></doc>"#).unwrap();
    let a = xtree.select(root, "/doc/a").unwrap();
    let b = xtree.select(root, "/doc/b").unwrap();
    assert_eq!(xtree.get_text(a), Some("hello"));
    // no text child
    assert_eq!(xtree.get_text(b), None);
    // not an element
    assert_eq!(xtree.get_text(root), None);
}

#[test]
fn test_document_element_only_on_root() {
    let mut xtree = Xtree::new();
    let root = xtree.parse(r#"<?xml version="1.0"?><doc><a/></doc>"#).unwrap();
    let doc = xtree.document_element(root).unwrap();
    assert_eq!(xtree.node_name(doc), Some("doc"));
    assert_eq!(xtree.document_element(doc), None);
}
