//! Turning recipe ingredients into shopping-list rows.
//!
//! A user has at most one shopping list per recipe. Adding ingredients from a
//! recipe either starts that list or appends to it; appended rows continue
//! the list's existing sequence.

use crate::error::DomainError;
use crate::ordering::{append_positions, next_position};

/// Longest shopping-list item name, in characters.
pub const MAX_ITEM_NAME_LEN: usize = 255;

/// Longest shopping memo, in characters.
pub const MAX_MEMO_LEN: usize = 1024;

/// The list a user already keeps for the recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExistingList<Id> {
    pub id: Id,
    pub ingredient_count: usize,
}

/// Which recipe ingredients the caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientSelection<Id> {
    All,
    Single(Id),
}

impl<Id> IngredientSelection<Id> {
    /// Reads the `addAll` flag and the optional single ingredient id.
    pub fn from_request(
        add_all: bool,
        recipe_ingredient_id: Option<Id>,
    ) -> Result<Self, DomainError> {
        if add_all {
            return Ok(IngredientSelection::All);
        }
        recipe_ingredient_id
            .map(IngredientSelection::Single)
            .ok_or_else(|| DomainError::validation("recipeIngredientId is required"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeTarget<Id> {
    /// No list exists yet; one has to be created first.
    Create,
    Append(Id),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedIngredient {
    pub name: String,
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePlan<Id> {
    pub target: MergeTarget<Id>,
    pub ingredients: Vec<PlannedIngredient>,
}

impl<Id> MergePlan<Id> {
    pub fn creates_list(&self) -> bool {
        matches!(self.target, MergeTarget::Create)
    }
}

/// Plans the rows to insert for `names`, given in recipe order.
///
/// A fresh list numbers the ingredients 1..n; an existing list with `m`
/// ingredients receives m+1..m+n. Nothing to add is a validation error so an
/// empty list is never created.
pub fn plan_merge<Id>(
    existing: Option<ExistingList<Id>>,
    names: Vec<String>,
) -> Result<MergePlan<Id>, DomainError> {
    if names.is_empty() {
        return Err(DomainError::validation(
            "Recipe has no ingredients to add",
        ));
    }

    let (target, count) = match existing {
        Some(list) => (MergeTarget::Append(list.id), list.ingredient_count),
        None => (MergeTarget::Create, 0),
    };

    let ingredients = append_positions(count, names.len())
        .zip(names)
        .map(|(sort_order, name)| PlannedIngredient { name, sort_order })
        .collect();

    Ok(MergePlan {
        target,
        ingredients,
    })
}

/// Plans a single hand-typed item appended to a list of `count` ingredients.
pub fn plan_append(count: usize, name: &str) -> Result<PlannedIngredient, DomainError> {
    Ok(PlannedIngredient {
        name: item_name(name)?,
        sort_order: next_position(count),
    })
}

/// Trims a shopping-list item name and checks it fits its column.
pub fn item_name(raw: &str) -> Result<String, DomainError> {
    bounded_text("name", raw, MAX_ITEM_NAME_LEN)
}

/// Trims a memo and checks it fits its column.
pub fn memo_text(raw: &str) -> Result<String, DomainError> {
    bounded_text("text", raw, MAX_MEMO_LEN)
}

fn bounded_text(field: &str, raw: &str, max_chars: usize) -> Result<String, DomainError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    if text.chars().count() > max_chars {
        return Err(DomainError::validation(format!(
            "{field} must be at most {max_chars} characters"
        )));
    }
    Ok(text.to_string())
}

/// What deleting ingredients takes with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Ingredient,
    /// No ingredient is left, so the list goes too.
    IngredientAndList,
}

/// Decides the cascade from the ingredient count taken before the delete.
pub fn removal_cascade(count_before: usize) -> Removal {
    if count_before <= 1 {
        Removal::IngredientAndList
    } else {
        Removal::Ingredient
    }
}

/// Decides the cascade of clearing bought rows from the count left afterwards.
pub fn clear_cascade(remaining: usize) -> Removal {
    if remaining == 0 {
        Removal::IngredientAndList
    } else {
        Removal::Ingredient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_fresh_list_numbers_from_one() {
        let plan = plan_merge::<u32>(None, names(&["flour", "egg", "milk"])).unwrap();
        assert!(plan.creates_list());
        assert_eq!(
            plan.ingredients,
            vec![
                PlannedIngredient {
                    name: "flour".to_string(),
                    sort_order: 1
                },
                PlannedIngredient {
                    name: "egg".to_string(),
                    sort_order: 2
                },
                PlannedIngredient {
                    name: "milk".to_string(),
                    sort_order: 3
                },
            ]
        );
    }

    #[test]
    fn test_existing_list_continues_sequence() {
        let existing = ExistingList {
            id: 7u32,
            ingredient_count: 3,
        };
        let plan = plan_merge(Some(existing), names(&["sugar"])).unwrap();
        assert_eq!(plan.target, MergeTarget::Append(7));
        assert_eq!(plan.ingredients[0].sort_order, 4);
    }

    #[test]
    fn test_empty_recipe_is_rejected() {
        let err = plan_merge::<u32>(None, Vec::new()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_selection_requires_ingredient_id_when_not_adding_all() {
        assert_eq!(
            IngredientSelection::<u32>::from_request(true, None),
            Ok(IngredientSelection::All)
        );
        assert_eq!(
            IngredientSelection::from_request(false, Some(3u32)),
            Ok(IngredientSelection::Single(3))
        );
        assert_eq!(
            IngredientSelection::<u32>::from_request(false, None),
            Err(DomainError::Validation(
                "recipeIngredientId is required".to_string()
            ))
        );
    }

    #[test]
    fn test_plan_append_trims_and_validates() {
        let planned = plan_append(3, "  sugar ").unwrap();
        assert_eq!(planned.name, "sugar");
        assert_eq!(planned.sort_order, 4);
        assert!(plan_append(0, "   ").is_err());
    }

    #[test]
    fn test_item_name_length_limit() {
        let longest = "a".repeat(MAX_ITEM_NAME_LEN);
        assert_eq!(item_name(&longest).unwrap(), longest);
        assert_eq!(
            item_name(&"a".repeat(MAX_ITEM_NAME_LEN + 1)),
            Err(DomainError::Validation(
                "name must be at most 255 characters".to_string()
            ))
        );
        assert!(plan_append(0, &"b".repeat(MAX_ITEM_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_limits_count_characters_not_bytes() {
        // 255 three-byte characters still fit
        let kana = "あ".repeat(MAX_ITEM_NAME_LEN);
        assert!(item_name(&kana).is_ok());
        let memo = "卵".repeat(MAX_MEMO_LEN);
        assert!(memo_text(&memo).is_ok());
    }

    #[test]
    fn test_memo_text_length_limit() {
        assert!(memo_text(&"m".repeat(MAX_MEMO_LEN)).is_ok());
        assert_eq!(
            memo_text(&"m".repeat(MAX_MEMO_LEN + 1)),
            Err(DomainError::Validation(
                "text must be at most 1024 characters".to_string()
            ))
        );
        assert_eq!(
            memo_text("  "),
            Err(DomainError::Validation("text is required".to_string()))
        );
    }

    #[test]
    fn test_limit_applies_after_trimming() {
        let padded = format!("  {}  ", "a".repeat(MAX_ITEM_NAME_LEN));
        assert_eq!(item_name(&padded).unwrap().len(), MAX_ITEM_NAME_LEN);
    }

    #[test]
    fn test_removal_cascade() {
        assert_eq!(removal_cascade(1), Removal::IngredientAndList);
        assert_eq!(removal_cascade(2), Removal::Ingredient);
    }

    #[test]
    fn test_clearing_every_row_drops_the_list() {
        assert_eq!(clear_cascade(0), Removal::IngredientAndList);
        assert_eq!(clear_cascade(1), Removal::Ingredient);
    }
}
