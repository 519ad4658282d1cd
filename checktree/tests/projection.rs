use checktree::prelude::*;
use checktree::presentation::{INDENT_STEP, indent, row_id};

const ALL_MODES: [Mode; 4] = [
    Mode::MultiSelect,
    Mode::SimpleSelect,
    Mode::RadioSelect,
    Mode::Hierarchical,
];

fn classes(node: &Node, config: &TreeConfig) -> Vec<String> {
    node_classes(node, config).iter().map(String::from).collect()
}

// ============================================================================
// Style classes
// ============================================================================

#[test]
fn test_leaf_and_tree_are_exclusive() {
    let config = TreeConfig::default();
    let leaf = Node::new("a", "A");
    let branch = Node::new("b", "B").child("c");

    let leaf_classes = node_classes(&leaf, &config);
    assert!(leaf_classes.contains("leaf"));
    assert!(!leaf_classes.contains("tree"));

    let branch_classes = node_classes(&branch, &config);
    assert!(branch_classes.contains("tree"));
    assert!(!branch_classes.contains("leaf"));
}

#[test]
fn test_class_order_follows_flag_order() {
    let config = TreeConfig::default()
        .keep_tree_on_search()
        .keep_children_on_search()
        .show_partially_selected();
    let node = Node::new("a", "A")
        .child("b")
        .disabled(true)
        .hidden(true)
        .match_in_children(true)
        .match_in_parent(true)
        .partial()
        .read_only(true)
        .focused(true)
        .class_name("custom");

    assert_eq!(
        classes(&node, &config),
        vec![
            "node",
            "tree",
            "disabled",
            "hide",
            "match-in-children",
            "match-in-parent",
            "partial",
            "readOnly",
            "focused",
            "custom",
        ]
    );
}

#[test]
fn test_minimal_leaf_classes() {
    let node = Node::new("a", "A");
    assert_eq!(classes(&node, &TreeConfig::default()), vec!["node", "leaf"]);
}

#[test]
fn test_checked_class_passthrough() {
    let node = Node::new("a", "A").checked();
    let list = node_classes(&node, &TreeConfig::default());
    assert!(list.contains("checked"));
    assert!(!list.contains("partial"));
}

#[test]
fn test_partial_suppressed_without_config() {
    let node = Node::new("a", "A").child("b").partial();

    let hidden = node_classes(&node, &TreeConfig::default());
    assert!(!hidden.contains("partial"));

    let shown = node_classes(&node, &TreeConfig::default().show_partially_selected());
    assert!(shown.contains("partial"));
}

#[test]
fn test_match_in_children_requires_keep_tree() {
    let node = Node::new("a", "A").match_in_children(true);

    assert!(!node_classes(&node, &TreeConfig::default()).contains("match-in-children"));
    assert!(
        node_classes(&node, &TreeConfig::default().keep_tree_on_search())
            .contains("match-in-children")
    );
}

#[test]
fn test_match_in_parent_requires_both_search_options() {
    let node = Node::new("a", "A").match_in_parent(true);

    let tree_only = TreeConfig::default().keep_tree_on_search();
    let children_only = TreeConfig::default().keep_children_on_search();
    let both = TreeConfig::default()
        .keep_tree_on_search()
        .keep_children_on_search();

    assert!(!node_classes(&node, &tree_only).contains("match-in-parent"));
    assert!(!node_classes(&node, &children_only).contains("match-in-parent"));
    assert!(node_classes(&node, &both).contains("match-in-parent"));
}

#[test]
fn test_extra_class_split_on_whitespace() {
    let node = Node::new("a", "A").class_name("  one two ");
    let list = node_classes(&node, &TreeConfig::default());

    assert!(list.contains("one"));
    assert!(list.contains("two"));
    assert_eq!(list.to_string(), "node leaf one two");
}

// ============================================================================
// ARIA attributes
// ============================================================================

#[test]
fn test_simple_select_is_option_without_tree_attributes() {
    let config = TreeConfig::new(Mode::SimpleSelect);
    let node = Node::new("a", "A").child("b").partial().depth(3).expanded(true);

    let aria = aria_attributes(&node, &config);
    assert_eq!(aria.role, Role::Option);
    assert_eq!(aria.checked, None);
    assert_eq!(aria.level, None);
    assert_eq!(aria.expanded, None);
    assert!(aria.get("aria-checked").is_none());
    assert!(aria.get("aria-level").is_none());
    assert!(aria.get("aria-expanded").is_none());
}

#[test]
fn test_tree_modes_are_treeitems() {
    for mode in [Mode::MultiSelect, Mode::RadioSelect, Mode::Hierarchical] {
        let aria = aria_attributes(&Node::new("a", "A"), &TreeConfig::new(mode));
        assert_eq!(aria.role, Role::TreeItem, "mode {:?}", mode);
    }
}

#[test]
fn test_aria_level_is_depth_plus_one() {
    let config = TreeConfig::default();

    let root = aria_attributes(&Node::new("a", "A"), &config);
    assert_eq!(root.level, Some(1));

    let nested = aria_attributes(&Node::new("b", "B").depth(4), &config);
    assert_eq!(nested.level, Some(5));
}

#[test]
fn test_aria_checked_values() {
    let config = TreeConfig::default();

    let partial = aria_attributes(&Node::new("a", "A").partial(), &config);
    assert_eq!(partial.checked, Some(AriaChecked::Mixed));
    assert_eq!(partial.get("aria-checked").as_deref(), Some("mixed"));

    let checked = aria_attributes(&Node::new("a", "A").checked(), &config);
    assert_eq!(checked.checked, Some(AriaChecked::Bool(true)));

    let unchecked = aria_attributes(&Node::new("a", "A"), &config);
    assert_eq!(unchecked.checked, Some(AriaChecked::Bool(false)));
}

#[test]
fn test_aria_checked_mixed_even_when_partial_hidden() {
    let config = TreeConfig::default();
    let node = Node::new("a", "A").partial();

    assert!(!node_classes(&node, &config).contains("partial"));
    assert_eq!(
        aria_attributes(&node, &config).checked,
        Some(AriaChecked::Mixed)
    );
}

#[test]
fn test_aria_expanded_only_on_branches() {
    let config = TreeConfig::default();

    let leaf = aria_attributes(&Node::new("a", "A").expanded(true), &config);
    assert_eq!(leaf.expanded, None);

    let collapsed = aria_attributes(&Node::new("b", "B").child("c"), &config);
    assert_eq!(collapsed.get("aria-expanded").as_deref(), Some("false"));

    let open = aria_attributes(&Node::new("b", "B").child("c").expanded(true), &config);
    assert_eq!(open.get("aria-expanded").as_deref(), Some("true"));
}

#[test]
fn test_aria_disabled_covers_read_only() {
    let config = TreeConfig::default();
    for mode in ALL_MODES {
        let config = config.clone().mode(mode);
        assert!(aria_attributes(&Node::new("a", "A").disabled(true), &config).disabled);
        assert!(aria_attributes(&Node::new("a", "A").read_only(true), &config).disabled);
        assert!(!aria_attributes(&Node::new("a", "A"), &config).disabled);
    }
}

#[test]
fn test_aria_selected_mirrors_checked() {
    let config = TreeConfig::new(Mode::SimpleSelect);
    assert!(aria_attributes(&Node::new("a", "A").checked(), &config).selected);
    assert!(!aria_attributes(&Node::new("a", "A").partial(), &config).selected);
}

#[test]
fn test_aria_serializes_with_attribute_names() {
    let node = Node::new("a", "A").child("b").partial().depth(1);
    let aria = aria_attributes(&node, &TreeConfig::default());

    let json = serde_json::to_value(aria).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "role": "treeitem",
            "aria-disabled": false,
            "aria-selected": false,
            "aria-checked": "mixed",
            "aria-level": 2,
            "aria-expanded": "false",
        })
    );
}

#[test]
fn test_simple_select_serialization_omits_tree_attributes() {
    let config = TreeConfig::new(Mode::SimpleSelect);
    let aria = aria_attributes(&Node::new("a", "A").checked(), &config);

    let json = serde_json::to_value(aria).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "role": "option",
            "aria-disabled": false,
            "aria-selected": true,
        })
    );
}

// ============================================================================
// Row presentation
// ============================================================================

#[test]
fn test_row_id_suffix() {
    assert_eq!(row_id("fruit"), "fruit_li");
}

#[test]
fn test_indent_by_depth() {
    let node = Node::new("a", "A").depth(3);
    assert_eq!(indent(&node, &TreeConfig::default()), Some(3 * INDENT_STEP));
    assert_eq!(indent(&Node::new("b", "B"), &TreeConfig::default()), Some(0));
}

#[test]
fn test_no_indent_while_searching_flat() {
    let node = Node::new("a", "A").depth(2);

    let searching = TreeConfig::default().search_mode_on(true);
    assert_eq!(indent(&node, &searching), None);

    let keep_tree = searching.keep_tree_on_search();
    assert_eq!(indent(&node, &keep_tree), Some(40));
}

#[test]
fn test_project_combines_everything() {
    let node = Node::new("veg", "Vegetables")
        .child("carrot")
        .checked()
        .depth(1)
        .data("rowKind", "group");
    let presentation = project(&node, &TreeConfig::default());

    assert_eq!(presentation.row_id, "veg_li");
    assert_eq!(presentation.classes.to_string(), "node tree checked");
    assert_eq!(presentation.aria.level, Some(2));
    assert_eq!(presentation.padding_left, Some(20));
    assert_eq!(
        presentation.data,
        vec![("data-row-kind".to_string(), "group".to_string())]
    );
}

#[test]
fn test_project_is_repeatable() {
    let node = Node::new("a", "A").child("b").partial().focused(true);
    let config = TreeConfig::default().show_partially_selected();

    assert_eq!(project(&node, &config), project(&node, &config));
}
