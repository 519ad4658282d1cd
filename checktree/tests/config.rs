use checktree::prelude::*;

#[test]
fn test_default_config() {
    let config = TreeConfig::default();

    assert_eq!(config.mode, Mode::MultiSelect);
    assert!(!config.keep_tree_on_search);
    assert!(!config.keep_children_on_search);
    assert!(!config.show_partially_selected);
    assert!(!config.search_mode_on);
    assert!(!config.defaults_enabled);
}

#[test]
fn test_builder() {
    let config = TreeConfig::new(Mode::RadioSelect)
        .keep_tree_on_search()
        .keep_children_on_search()
        .search_mode_on(true)
        .defaults_enabled(true);

    assert_eq!(config.mode, Mode::RadioSelect);
    assert!(config.keep_tree_on_search);
    assert!(config.keep_children_on_search);
    assert!(config.search_mode_on);
    assert!(config.defaults_enabled);
}

#[test]
fn test_from_json_camel_case() {
    let config = TreeConfig::from_json(
        r#"{
            "mode": "hierarchical",
            "showPartiallySelected": true,
            "defaultsEnabled": true
        }"#,
    )
    .unwrap();

    assert_eq!(config.mode, Mode::Hierarchical);
    assert!(config.show_partially_selected);
    assert!(config.defaults_enabled);
    assert!(!config.keep_tree_on_search);
}

#[test]
fn test_from_json_empty_object_is_default() {
    assert_eq!(TreeConfig::from_json("{}").unwrap(), TreeConfig::default());
}

#[test]
fn test_from_json_rejects_unknown_mode() {
    let err = TreeConfig::from_json(r#"{ "mode": "checkAll" }"#).unwrap_err();
    assert!(err.to_string().starts_with("Invalid tree configuration"));
}

#[test]
fn test_from_json_rejects_malformed_document() {
    assert!(matches!(
        TreeConfig::from_json("not json"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_mode_single_selection() {
    assert!(Mode::SimpleSelect.is_single());
    assert!(Mode::RadioSelect.is_single());
    assert!(!Mode::MultiSelect.is_single());
    assert!(!Mode::Hierarchical.is_single());
}

#[test]
fn test_nodes_load_from_json() {
    let node: Node = serde_json::from_str(
        r#"{
            "id": "fruit",
            "label": "Fruit",
            "parentId": "food",
            "selectedByDefault": true,
            "notSelectable": false,
            "state": "partial",
            "dataset": { "rowKind": "group" }
        }"#,
    )
    .unwrap();

    assert_eq!(node.parent_id.as_deref(), Some("food"));
    assert!(node.selected_by_default);
    assert!(node.is_partial());
    assert!(node.is_leaf());
    assert_eq!(node.depth, None);
    assert_eq!(node.dataset.get("rowKind").map(String::as_str), Some("group"));
}

#[test]
fn test_selection_error_messages() {
    assert_eq!(
        SelectionError::NodeNotFound("a".into()).to_string(),
        "Node 'a' not found"
    );
    assert_eq!(
        SelectionError::NotSelectable("a".into()).to_string(),
        "Node 'a' is not selectable"
    );
}
