use std::collections::HashMap;

use satchel_core::entity::{identity_key, is_empty_value, Entity};

use crate::dedupe::present_id;

/// Like `dedupe_by_id`, but later duplicates may enrich the survivor.
///
/// For each field in `merge_fields`: if the survivor's value is missing,
/// null, or empty text and a later duplicate carries a non-empty value, the
/// value is copied in. First non-empty wins, independently per field. The
/// survivor's identity and non-merge fields are never overwritten.
pub fn dedupe_with_merge(
    lists: &[&[Entity]],
    id_field: &str,
    merge_fields: &[String],
) -> Vec<Entity> {
    let mut index_by_key: HashMap<String, usize> = HashMap::new();
    let mut result: Vec<Entity> = Vec::new();

    for list in lists {
        for entity in *list {
            let Some(value) = present_id(entity, id_field) else {
                // Id-less entities are each unique and never merge targets.
                result.push(entity.clone());
                continue;
            };

            let key = identity_key(value);
            match index_by_key.get(&key) {
                None => {
                    index_by_key.insert(key, result.len());
                    result.push(entity.clone());
                }
                Some(&survivor_index) => {
                    enrich(&mut result[survivor_index], entity, merge_fields);
                }
            }
        }
    }

    result
}

/// Copy each merge field from `duplicate` into `survivor` when the
/// survivor's slot is empty and the duplicate's value is not.
fn enrich(survivor: &mut Entity, duplicate: &Entity, merge_fields: &[String]) {
    for field in merge_fields {
        let slot_empty = survivor.get(field).map(is_empty_value).unwrap_or(true);
        if !slot_empty {
            continue;
        }
        if let Some(value) = duplicate.get(field) {
            if !is_empty_value(value) {
                survivor.insert(field.as_str(), value.clone());
            }
        }
    }
}
