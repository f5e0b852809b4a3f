pub mod chef;
pub mod error;
pub mod links;
pub mod merge;
pub mod ordering;
pub mod popularity;
pub mod types;

pub use chef::{ChefDraft, ChefKind, ChefRole};
pub use error::{DomainError, ReorderError};
pub use links::{ensure_site_type_available, SiteType};
pub use merge::{
    clear_cascade, item_name, memo_text, plan_append, plan_merge, removal_cascade, ExistingList,
    IngredientSelection, MergePlan, MergeTarget, PlannedIngredient, Removal, MAX_ITEM_NAME_LEN,
    MAX_MEMO_LEN,
};
pub use ordering::{
    append_positions, close_gap, compact, move_item, next_position, Direction, MemoryScope,
    MoveOutcome, Positioned, SortScope, FIRST_POSITION,
};
pub use popularity::{rank_by_recent_activity, window_start, Activity, RANKING_LIMIT};
pub use types::RecipeStatus;
