//! Diesel-backed sort scopes.
//!
//! Each scope covers the rows sharing one parent: the ingredients of a list,
//! or the lists and memos of a user. Writes go through the connection they
//! were built with, so callers wrap a whole reorder in one transaction.

use diesel::prelude::*;
use kondate_core::{Positioned, SortScope};
use uuid::Uuid;

use crate::schema::{shopping_list_ingredients, shopping_lists, shopping_memos};

macro_rules! pg_sort_scope {
    ($(#[$meta:meta])* $name:ident, $table:ident, $parent:ident) => {
        $(#[$meta])*
        pub struct $name<'a> {
            conn: &'a mut PgConnection,
            parent_id: Uuid,
        }

        impl<'a> $name<'a> {
            pub fn new(conn: &'a mut PgConnection, parent_id: Uuid) -> Self {
                Self { conn, parent_id }
            }

            /// Number of rows in the scope.
            pub fn count(&mut self) -> QueryResult<usize> {
                let count: i64 = $table::table
                    .filter($table::$parent.eq(self.parent_id))
                    .count()
                    .get_result(&mut *self.conn)?;
                Ok(count as usize)
            }
        }

        impl SortScope for $name<'_> {
            type Id = Uuid;
            type Error = diesel::result::Error;

            fn find_at(&mut self, sort_order: i32) -> QueryResult<Option<Uuid>> {
                $table::table
                    .filter($table::$parent.eq(self.parent_id))
                    .filter($table::sort_order.eq(sort_order))
                    .select($table::id)
                    .first(&mut *self.conn)
                    .optional()
            }

            fn set_sort_order(&mut self, id: Uuid, sort_order: i32) -> QueryResult<()> {
                diesel::update(
                    $table::table
                        .filter($table::id.eq(id))
                        .filter($table::$parent.eq(self.parent_id)),
                )
                .set($table::sort_order.eq(sort_order))
                .execute(&mut *self.conn)?;
                Ok(())
            }

            fn positions(&mut self) -> QueryResult<Vec<Positioned<Uuid>>> {
                let rows: Vec<(Uuid, i32)> = $table::table
                    .filter($table::$parent.eq(self.parent_id))
                    .order(($table::sort_order.asc(), $table::created_at.asc()))
                    .select(($table::id, $table::sort_order))
                    .load(&mut *self.conn)?;
                Ok(rows
                    .into_iter()
                    .map(|(id, sort_order)| Positioned::new(id, sort_order))
                    .collect())
            }

            fn shift_down_after(&mut self, sort_order: i32) -> QueryResult<usize> {
                diesel::update(
                    $table::table
                        .filter($table::$parent.eq(self.parent_id))
                        .filter($table::sort_order.gt(sort_order)),
                )
                .set($table::sort_order.eq($table::sort_order - 1))
                .execute(&mut *self.conn)
            }
        }
    };
}

pg_sort_scope!(
    /// Ingredients of one shopping list.
    IngredientScope,
    shopping_list_ingredients,
    shopping_list_id
);

pg_sort_scope!(
    /// Shopping lists of one user.
    ShoppingListScope,
    shopping_lists,
    user_id
);

pg_sort_scope!(
    /// Memos of one user.
    MemoScope,
    shopping_memos,
    user_id
);
