//! Conversion of node datasets into `data-*` attributes.

use std::collections::BTreeMap;

/// Attribute name for a dataset key: `data-` followed by the key with
/// every uppercase letter turned into `-` plus its lowercase form.
pub fn data_attribute_name(key: &str) -> String {
    let mut name = String::with_capacity(key.len() + 8);
    name.push_str("data-");
    for c in key.chars() {
        if c.is_uppercase() {
            name.push('-');
            name.extend(c.to_lowercase());
        } else {
            name.push(c);
        }
    }
    name
}

/// Map a dataset to attribute name/value pairs, in key order.
pub fn dataset_attributes(dataset: &BTreeMap<String, String>) -> Vec<(String, String)> {
    dataset
        .iter()
        .map(|(key, value)| (data_attribute_name(key), value.clone()))
        .collect()
}
