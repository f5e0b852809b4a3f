use kondate_core::{
    clear_cascade, close_gap, compact, move_item, plan_append, plan_merge, removal_cascade,
    Direction, ExistingList, IngredientSelection, MemoryScope, MergeTarget, MoveOutcome,
    Positioned, Removal, ReorderError, SortScope,
};

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A list's ingredients kept in memory, keyed by name.
fn scope_from_plan(plan: &[kondate_core::PlannedIngredient]) -> MemoryScope<&str> {
    MemoryScope::new(
        plan.iter()
            .map(|ingredient| (ingredient.name.as_str(), ingredient.sort_order)),
    )
}

fn assert_contiguous<Id: Copy + PartialEq + std::fmt::Debug>(scope: &mut MemoryScope<Id>) {
    let orders: Vec<i32> = scope
        .positions()
        .unwrap()
        .into_iter()
        .map(|row| row.sort_order)
        .collect();
    let expected: Vec<i32> = (1..=orders.len() as i32).collect();
    assert_eq!(orders, expected);
}

#[test]
fn recipe_then_single_item() {
    let plan = plan_merge::<u32>(None, names(&["flour", "egg", "milk"])).unwrap();
    assert_eq!(plan.target, MergeTarget::Create);

    let mut scope = scope_from_plan(&plan.ingredients);
    assert_eq!(scope.ordered_ids(), vec!["flour", "egg", "milk"]);

    let sugar = plan_append(scope.len(), "sugar").unwrap();
    assert_eq!(sugar.sort_order, 4);
    assert_eq!(scope.push("sugar"), sugar.sort_order);
    assert_contiguous(&mut scope);
}

#[test]
fn merging_twice_appends_after_existing() {
    let first = plan_merge::<u32>(None, names(&["rice", "nori"])).unwrap();
    let existing = ExistingList {
        id: 7,
        ingredient_count: first.ingredients.len(),
    };
    let second = plan_merge(Some(existing), names(&["salmon", "soy sauce", "wasabi"])).unwrap();

    assert_eq!(second.target, MergeTarget::Append(7));
    let orders: Vec<i32> = second.ingredients.iter().map(|i| i.sort_order).collect();
    assert_eq!(orders, vec![3, 4, 5]);

    let mut all = first.ingredients.clone();
    all.extend(second.ingredients);
    assert_contiguous(&mut scope_from_plan(&all));
}

#[test]
fn single_selection_needs_an_id() {
    assert_eq!(
        IngredientSelection::<u32>::from_request(false, Some(3)),
        Ok(IngredientSelection::Single(3))
    );
    assert_eq!(
        IngredientSelection::<u32>::from_request(true, None),
        Ok(IngredientSelection::All)
    );
    assert!(IngredientSelection::<u32>::from_request(false, None).is_err());
}

#[test]
fn deleting_down_to_empty_removes_the_list() {
    let mut scope = MemoryScope::sequential(["a", "b", "c"]);

    for id in ["b", "a"] {
        assert_eq!(removal_cascade(scope.len()), Removal::Ingredient);
        let removed = scope.remove(id).unwrap();
        close_gap(&mut scope, removed).unwrap();
        assert_contiguous(&mut scope);
    }

    assert_eq!(scope.sort_order_of("c"), Some(1));
    assert_eq!(removal_cascade(scope.len()), Removal::IngredientAndList);
}

#[test]
fn move_round_trip_restores_order() {
    let mut scope = MemoryScope::sequential([10, 20, 30, 40]);

    let down = move_item(&mut scope, Positioned::new(20, 2), Direction::Down).unwrap();
    assert_eq!(
        down,
        MoveOutcome::Swapped {
            neighbor: 30,
            from: 2,
            to: 3
        }
    );
    move_item(&mut scope, Positioned::new(20, 3), Direction::Up).unwrap();

    assert_eq!(scope.ordered_ids(), vec![10, 20, 30, 40]);
    assert_eq!(scope.writes(), 4);
}

#[test]
fn last_row_cannot_move_down() {
    let mut scope = MemoryScope::sequential(['x', 'y']);
    let err = move_item(&mut scope, Positioned::new('y', 2), Direction::Down).unwrap_err();
    assert!(matches!(err, ReorderError::NoNeighbor { sort_order: 3 }));
    assert_eq!(scope.ordered_ids(), vec!['x', 'y']);
}

#[test]
fn bought_rows_cleared_then_compacted() {
    let mut scope = MemoryScope::sequential(["eggs", "milk", "bread", "butter", "jam"]);
    for bought in ["milk", "butter"] {
        scope.remove(bought);
    }

    assert_eq!(compact(&mut scope).unwrap(), 2);
    assert_eq!(scope.ordered_ids(), vec!["eggs", "bread", "jam"]);
    assert_contiguous(&mut scope);
    assert_eq!(clear_cascade(scope.len()), Removal::Ingredient);
}

#[test]
fn clearing_a_fully_bought_list_removes_it() {
    let mut lists = MemoryScope::sequential(["curry", "ramen", "salad"]);
    let mut ramen = MemoryScope::sequential(["noodles", "pork"]);
    for bought in ["noodles", "pork"] {
        ramen.remove(bought);
    }
    compact(&mut ramen).unwrap();

    assert_eq!(clear_cascade(ramen.len()), Removal::IngredientAndList);
    let removed = lists.remove("ramen").unwrap();
    close_gap(&mut lists, removed).unwrap();
    assert_eq!(lists.ordered_ids(), vec!["curry", "salad"]);
    assert_contiguous(&mut lists);
}

/// Mixed appends, moves and deletes never leave a gap behind.
#[test]
fn positions_stay_contiguous_under_mixed_edits() {
    let mut scope: MemoryScope<u32> = MemoryScope::default();
    let mut next_id = 0u32;
    let mut seed = 0x2545_f491u32;

    for _ in 0..200 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let roll = (seed >> 16) % 4;
        let ids = scope.ordered_ids();

        match (roll, ids.is_empty()) {
            (0, _) | (_, true) => {
                scope.push(next_id);
                next_id += 1;
            }
            (1, false) => {
                let id = ids[(seed as usize >> 3) % ids.len()];
                let removed = scope.remove(id).unwrap();
                close_gap(&mut scope, removed).unwrap();
            }
            (_, false) => {
                let id = ids[(seed as usize >> 5) % ids.len()];
                let item = scope.get(id).unwrap();
                let direction = if roll == 2 { Direction::Up } else { Direction::Down };
                match move_item(&mut scope, item, direction) {
                    Ok(_) => {}
                    Err(ReorderError::NoNeighbor { sort_order }) => {
                        assert_eq!(sort_order, scope.len() as i32 + 1);
                    }
                    Err(ReorderError::Store(never)) => match never {},
                }
            }
        }

        assert_contiguous(&mut scope);
    }
}
