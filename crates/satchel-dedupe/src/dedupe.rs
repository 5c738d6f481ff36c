use std::collections::{HashMap, HashSet};

use serde_json::Value;

use satchel_core::entity::{identity_key, Entity};

use crate::policy::KeepPolicy;

/// Merge multiple lists, keeping the first occurrence of each identity
/// value across the full multi-source scan. Earlier lists take precedence
/// over later ones.
///
/// Entities lacking the id field (or carrying a null id) are each unique:
/// always kept, never deduped against anything — including each other.
pub fn dedupe_by_id(lists: &[&[Entity]], id_field: &str) -> Vec<Entity> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut result: Vec<Entity> = Vec::new();

    for list in lists {
        for entity in *list {
            match present_id(entity, id_field) {
                Some(value) => {
                    if seen.insert(identity_key(value)) {
                        result.push(entity.clone());
                    }
                }
                None => result.push(entity.clone()),
            }
        }
    }

    result
}

/// Remove duplicates within a single list by a field value.
///
/// Entities missing the field (or with a null value) form one shared
/// group. With `KeepPolicy::Last`, survivors keep their original
/// positions.
pub fn dedupe_by_field(entities: &[Entity], field: &str, keep: KeepPolicy) -> Vec<Entity> {
    match keep {
        KeepPolicy::First => {
            let mut seen: HashSet<Option<String>> = HashSet::new();
            entities
                .iter()
                .filter(|entity| seen.insert(group_key(entity, field)))
                .cloned()
                .collect()
        }
        KeepPolicy::Last => {
            let mut last_index: HashMap<Option<String>, usize> = HashMap::new();
            for (i, entity) in entities.iter().enumerate() {
                last_index.insert(group_key(entity, field), i);
            }
            entities
                .iter()
                .enumerate()
                .filter(|(i, entity)| last_index.get(&group_key(entity, field)) == Some(i))
                .map(|(_, entity)| entity.clone())
                .collect()
        }
    }
}

/// The id value, treating null as absent.
pub(crate) fn present_id<'a>(entity: &'a Entity, id_field: &str) -> Option<&'a Value> {
    entity.get(id_field).filter(|v| !v.is_null())
}

fn group_key(entity: &Entity, field: &str) -> Option<String> {
    present_id(entity, field).map(identity_key)
}
