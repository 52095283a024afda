use xtree::Xtree;

const CATALOG: &str = r#"<catalog>
    <book id="1" lang="en"><title>First</title></book>
    <book id="2" lang="de"><title>Second</title></book>
    <cd id="3"><title>Third</title></cd>
</catalog>"#;

#[test]
fn test_absolute_path() {
    let mut xtree = Xtree::new();
    let root = xtree.parse(CATALOG).unwrap();
    let books = xtree.select_nodes(root, "/catalog/book");
    assert_eq!(books.len(), 2);
    let titles = xtree.select_nodes(root, "/catalog/book/title");
    assert_eq!(titles.len(), 2);
    assert_eq!(xtree.get_text(titles[0]), Some("First"));
    assert_eq!(xtree.get_text(titles[1]), Some("Second"));
}

#[test]
fn test_absolute_path_from_inner_node() {
    let mut xtree = Xtree::new();
    let root = xtree.parse(CATALOG).unwrap();
    let book = xtree.select(root, "/catalog/book").unwrap();
    // absolute paths re-anchor at the document root
    let cds = xtree.select_nodes(book, "/catalog/cd");
    assert_eq!(cds.len(), 1);
}

#[test]
fn test_relative_path() {
    let mut xtree = Xtree::new();
    let root = xtree.parse(CATALOG).unwrap();
    let catalog = xtree.document_element(root).unwrap();
    let titles = xtree.select_nodes(catalog, "book/title");
    assert_eq!(titles.len(), 2);
}

#[test]
fn test_attribute_presence_filter() {
    let mut xtree = Xtree::new();
    let root = xtree.parse(CATALOG).unwrap();
    let with_lang = xtree.select_nodes(root, "/catalog/book/@lang");
    assert_eq!(with_lang.len(), 2);
    let with_lang = xtree.select_nodes(root, "/catalog/cd/@lang");
    assert!(with_lang.is_empty());
}

#[test]
fn test_attribute_value_filter() {
    let mut xtree = Xtree::new();
    let root = xtree.parse(CATALOG).unwrap();
    let german = xtree.select_nodes(root, "/catalog/book/@lang=de");
    assert_eq!(german.len(), 1);
    assert_eq!(
        xtree.get_text(xtree.select(german[0], "title").unwrap()),
        Some("Second")
    );
}

#[test]
fn test_select_returns_first_in_document_order() {
    let mut xtree = Xtree::new();
    let root = xtree.parse(CATALOG).unwrap();
    let book = xtree.select(root, "/catalog/book").unwrap();
    assert_eq!(xtree.select_attribute(book, "id"), Some("1"));
}

#[test]
fn test_no_match() {
    let mut xtree = Xtree::new();
    let root = xtree.parse(CATALOG).unwrap();
    assert!(xtree.select(root, "/catalog/dvd").is_none());
    assert!(xtree.select_nodes(root, "/nothing").is_empty());
}

#[test]
fn test_prefix_blind_matching() {
    let mut xtree = Xtree::new();
    let root = xtree.parse(r#"<ns:a><ns:b/><b/></ns:a>"#).unwrap();
    let matched = xtree.select_nodes(root, "/a/b");
    assert_eq!(matched.len(), 2);
}

#[test]
fn test_select_attribute_step_forms() {
    let mut xtree = Xtree::new();
    let root = xtree.parse(CATALOG).unwrap();
    let book = xtree.select(root, "/catalog/book").unwrap();
    assert_eq!(xtree.select_attribute(book, "lang"), Some("en"));
    assert_eq!(xtree.select_attribute(book, "@lang"), Some("en"));
    assert_eq!(xtree.select_attribute(book, "@lang=de"), Some("en"));
    assert_eq!(xtree.select_attribute(book, "missing"), None);
}
