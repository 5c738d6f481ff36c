use proptest::prelude::*;
use satchel_core::entity::{render_text, Entity};
use satchel_tokens::TokenEstimator;

proptest! {
    #[test]
    fn count_is_total_and_bounded(s in ".{0,400}") {
        let estimator = TokenEstimator::default();
        let count = estimator.count(&s);
        if s.is_empty() {
            prop_assert_eq!(count, 0);
        } else {
            prop_assert!(count >= 1);
            prop_assert!(count <= s.chars().count());
        }
    }

    #[test]
    fn cached_equals_uncached(s in ".{0,200}") {
        let estimator = TokenEstimator::default();
        prop_assert_eq!(estimator.count_cached(&s), estimator.count(&s));
        // Second read hits the cache and must agree too.
        prop_assert_eq!(estimator.count_cached(&s), estimator.count(&s));
    }

    #[test]
    fn entity_cost_is_sum_of_field_costs(a in ".{0,100}", b in ".{0,100}") {
        let estimator = TokenEstimator::default();
        let entity = Entity::new().with("a", a.clone()).with("b", b.clone());

        let fields = vec!["a".to_string(), "b".to_string()];
        let expected = estimator.count(&a) + estimator.count(&b);
        prop_assert_eq!(estimator.count_for_entity(&entity, Some(&fields)), expected);
    }

    #[test]
    fn absent_fields_never_change_cost(s in ".{0,100}") {
        let estimator = TokenEstimator::default();
        let entity = Entity::new().with("text", s);

        let just_text = vec!["text".to_string()];
        let with_ghosts = vec![
            "text".to_string(),
            "missing_one".to_string(),
            "missing_two".to_string(),
        ];
        prop_assert_eq!(
            estimator.count_for_entity(&entity, Some(&just_text)),
            estimator.count_for_entity(&entity, Some(&with_ghosts))
        );
    }

    #[test]
    fn batch_costs_match_individual_costs(texts in prop::collection::vec(".{0,50}", 0..20)) {
        let estimator = TokenEstimator::default();
        let entities: Vec<Entity> = texts
            .iter()
            .map(|t| Entity::new().with("text", t.clone()))
            .collect();

        let pairs = estimator.count_for_entities(&entities, None);
        prop_assert_eq!(pairs.len(), entities.len());
        for (entity, cost) in pairs {
            prop_assert_eq!(cost, estimator.count_for_entity(entity, None));
        }
    }
}

#[test]
fn rendered_value_cost_matches_plain_text_cost() {
    let estimator = TokenEstimator::default();
    let entity = Entity::new().with("text", "some plain sentence here");

    let rendered = render_text(entity.get("text").unwrap()).unwrap();
    assert_eq!(
        estimator.count_for_entity(&entity, None),
        estimator.count(&rendered)
    );
}
