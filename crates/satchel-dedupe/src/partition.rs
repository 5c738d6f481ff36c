use std::collections::BTreeMap;

use serde_json::Value;

use satchel_core::entity::Entity;

/// Group key for entities missing the partition field (or carrying null).
pub const ABSENT_GROUP: &str = "__none__";

/// Partition entities into groups by a field's rendered value, preserving
/// input order within each group. Useful for routing groups through
/// different scoring or budget treatment.
pub fn partition_by_field(entities: &[Entity], field: &str) -> BTreeMap<String, Vec<Entity>> {
    let mut groups: BTreeMap<String, Vec<Entity>> = BTreeMap::new();

    for entity in entities {
        let key = match entity.get(field) {
            Some(Value::Null) | None => ABSENT_GROUP.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        };
        groups.entry(key).or_default().push(entity.clone());
    }

    groups
}

/// Filter entities by id inclusion/exclusion.
///
/// With a keep-list, entities lacking the id field are dropped (they cannot
/// match any listed id); with only an exclude-list they pass through.
pub fn filter_by_ids(
    entities: &[Entity],
    ids_to_keep: Option<&[Value]>,
    ids_to_exclude: Option<&[Value]>,
    id_field: &str,
) -> Vec<Entity> {
    entities
        .iter()
        .filter(|entity| {
            let id = entity.get(id_field);

            if let Some(keep) = ids_to_keep {
                match id {
                    Some(value) => {
                        if !keep.contains(value) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }

            if let (Some(exclude), Some(value)) = (ids_to_exclude, id) {
                if exclude.contains(value) {
                    return false;
                }
            }

            true
        })
        .cloned()
        .collect()
}
