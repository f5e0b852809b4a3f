//! Position bookkeeping for rows that share a parent scope.
//!
//! A scope is one shopping list's ingredients, one user's shopping lists, or
//! one user's memos. Inside a scope `sort_order` runs 1, 2, 3, ... with no
//! gaps. The functions here decide which positions change; a [`SortScope`]
//! implementation applies the writes. Callers that need the writes to land
//! together run them inside a single transaction.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, ReorderError};

/// First position in every scope.
pub const FIRST_POSITION: i32 = 1;

/// Which neighbour a row trades places with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards position 1.
    Up,
    /// Away from position 1.
    Down,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    fn neighbor_of(self, sort_order: i32) -> i32 {
        match self {
            Direction::Up => sort_order - 1,
            Direction::Down => sort_order + 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            other => Err(DomainError::validation(format!(
                "Position must be \"up\" or \"down\", got \"{other}\""
            ))),
        }
    }
}

/// A row id together with its current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Positioned<Id> {
    pub id: Id,
    pub sort_order: i32,
}

impl<Id> Positioned<Id> {
    pub fn new(id: Id, sort_order: i32) -> Self {
        Self { id, sort_order }
    }
}

/// Storage for the rows of one scope.
pub trait SortScope {
    type Id: Copy + PartialEq + fmt::Debug;
    type Error;

    /// The row currently holding `sort_order`, if any.
    fn find_at(&mut self, sort_order: i32) -> Result<Option<Self::Id>, Self::Error>;

    fn set_sort_order(&mut self, id: Self::Id, sort_order: i32) -> Result<(), Self::Error>;

    /// Every row of the scope, in display order.
    fn positions(&mut self) -> Result<Vec<Positioned<Self::Id>>, Self::Error>;

    /// Decrements the position of every row placed after `sort_order` and
    /// returns how many rows moved.
    fn shift_down_after(&mut self, sort_order: i32) -> Result<usize, Self::Error>;
}

/// What a move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome<Id> {
    /// The row was already first; nothing was written.
    Unchanged,
    /// The row and `neighbor` traded positions `from` and `to`.
    Swapped { neighbor: Id, from: i32, to: i32 },
}

/// Swaps `item` with its neighbour in `direction`.
///
/// Moving the first row up is a no-op. Moving a row towards an empty position
/// (including moving the last row down) fails with
/// [`ReorderError::NoNeighbor`] and writes nothing.
pub fn move_item<S: SortScope>(
    scope: &mut S,
    item: Positioned<S::Id>,
    direction: Direction,
) -> Result<MoveOutcome<S::Id>, ReorderError<S::Error>> {
    if direction == Direction::Up && item.sort_order <= FIRST_POSITION {
        return Ok(MoveOutcome::Unchanged);
    }

    let target = direction.neighbor_of(item.sort_order);
    let neighbor = scope
        .find_at(target)
        .map_err(ReorderError::Store)?
        .ok_or(ReorderError::NoNeighbor { sort_order: target })?;

    scope
        .set_sort_order(neighbor, item.sort_order)
        .map_err(ReorderError::Store)?;
    scope
        .set_sort_order(item.id, target)
        .map_err(ReorderError::Store)?;

    Ok(MoveOutcome::Swapped {
        neighbor,
        from: item.sort_order,
        to: target,
    })
}

/// Position for a row appended to a scope that holds `count` rows.
pub fn next_position(count: usize) -> i32 {
    count as i32 + FIRST_POSITION
}

/// Positions for `n` rows appended, in order, to a scope holding `count` rows.
pub fn append_positions(count: usize, n: usize) -> impl Iterator<Item = i32> {
    let start = next_position(count);
    start..start + n as i32
}

/// Pulls every row after `removed` up by one after a single row was deleted.
pub fn close_gap<S: SortScope>(scope: &mut S, removed: i32) -> Result<usize, S::Error> {
    scope.shift_down_after(removed)
}

/// Renumbers the scope to 1..n, keeping the current order.
///
/// Only rows whose position changes are written. Returns the number of
/// writes.
pub fn compact<S: SortScope>(scope: &mut S) -> Result<usize, S::Error> {
    let mut touched = 0;
    for (expected, row) in (FIRST_POSITION..).zip(scope.positions()?) {
        if row.sort_order != expected {
            scope.set_sort_order(row.id, expected)?;
            touched += 1;
        }
    }
    Ok(touched)
}

/// A scope held in memory.
///
/// Useful for exercising the ordering rules without a database and for
/// reasoning about a batch of rows that were already loaded.
#[derive(Debug, Clone, Default)]
pub struct MemoryScope<Id> {
    rows: Vec<Positioned<Id>>,
    writes: usize,
}

impl<Id: Copy + PartialEq + fmt::Debug> MemoryScope<Id> {
    pub fn new(rows: impl IntoIterator<Item = (Id, i32)>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|(id, sort_order)| Positioned::new(id, sort_order))
                .collect(),
            writes: 0,
        }
    }

    /// Builds a scope whose rows sit at 1..n in the given order.
    pub fn sequential(ids: impl IntoIterator<Item = Id>) -> Self {
        Self::new(ids.into_iter().zip(FIRST_POSITION..))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: Id) -> Option<Positioned<Id>> {
        self.rows.iter().copied().find(|row| row.id == id)
    }

    pub fn sort_order_of(&self, id: Id) -> Option<i32> {
        self.get(id).map(|row| row.sort_order)
    }

    /// Removes a row without touching its siblings and returns its position.
    pub fn remove(&mut self, id: Id) -> Option<i32> {
        let index = self.rows.iter().position(|row| row.id == id)?;
        Some(self.rows.remove(index).sort_order)
    }

    /// Appends a row at the next free position.
    pub fn push(&mut self, id: Id) -> i32 {
        let sort_order = next_position(self.rows.len());
        self.rows.push(Positioned::new(id, sort_order));
        sort_order
    }

    /// Ids ordered by position.
    pub fn ordered_ids(&self) -> Vec<Id> {
        let mut rows = self.rows.clone();
        rows.sort_by_key(|row| row.sort_order);
        rows.into_iter().map(|row| row.id).collect()
    }

    /// Number of position writes applied so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl<Id: Copy + PartialEq + fmt::Debug> SortScope for MemoryScope<Id> {
    type Id = Id;
    type Error = Infallible;

    fn find_at(&mut self, sort_order: i32) -> Result<Option<Id>, Infallible> {
        Ok(self
            .rows
            .iter()
            .find(|row| row.sort_order == sort_order)
            .map(|row| row.id))
    }

    fn set_sort_order(&mut self, id: Id, sort_order: i32) -> Result<(), Infallible> {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == id) {
            row.sort_order = sort_order;
            self.writes += 1;
        }
        Ok(())
    }

    fn positions(&mut self) -> Result<Vec<Positioned<Id>>, Infallible> {
        let mut rows = self.rows.clone();
        rows.sort_by_key(|row| row.sort_order);
        Ok(rows)
    }

    fn shift_down_after(&mut self, sort_order: i32) -> Result<usize, Infallible> {
        let mut moved = 0;
        for row in self.rows.iter_mut().filter(|row| row.sort_order > sort_order) {
            row.sort_order -= 1;
            moved += 1;
        }
        self.writes += moved;
        Ok(moved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orders(scope: &MemoryScope<char>) -> Vec<(char, i32)> {
        scope
            .ordered_ids()
            .into_iter()
            .map(|id| (id, scope.sort_order_of(id).unwrap()))
            .collect()
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("down".parse::<Direction>(), Ok(Direction::Down));
        assert!(matches!(
            "sideways".parse::<Direction>(),
            Err(DomainError::Validation(_))
        ));
        assert!("UP".parse::<Direction>().is_err());
    }

    #[test]
    fn test_up_from_first_is_noop() {
        let mut scope = MemoryScope::sequential(['a', 'b', 'c']);
        let outcome = move_item(&mut scope, Positioned::new('a', 1), Direction::Up).unwrap();
        assert_eq!(outcome, MoveOutcome::Unchanged);
        assert_eq!(scope.writes(), 0);
        assert_eq!(orders(&scope), vec![('a', 1), ('b', 2), ('c', 3)]);
    }

    #[test]
    fn test_up_swaps_with_previous() {
        let mut scope = MemoryScope::sequential(['a', 'b', 'c', 'd']);
        let outcome = move_item(&mut scope, Positioned::new('c', 3), Direction::Up).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Swapped {
                neighbor: 'b',
                from: 3,
                to: 2
            }
        );
        assert_eq!(scope.writes(), 2);
        assert_eq!(scope.ordered_ids(), vec!['a', 'c', 'b', 'd']);
    }

    #[test]
    fn test_down_swaps_with_next() {
        let mut scope = MemoryScope::sequential(['a', 'b', 'c']);
        move_item(&mut scope, Positioned::new('a', 1), Direction::Down).unwrap();
        assert_eq!(orders(&scope), vec![('b', 1), ('a', 2), ('c', 3)]);
    }

    #[test]
    fn test_down_from_last_has_no_neighbor() {
        let mut scope = MemoryScope::sequential(['a', 'b']);
        let err = move_item(&mut scope, Positioned::new('b', 2), Direction::Down).unwrap_err();
        assert_eq!(err, ReorderError::NoNeighbor { sort_order: 3 });
        assert_eq!(scope.writes(), 0);
    }

    #[test]
    fn test_up_into_gap_has_no_neighbor() {
        let mut scope = MemoryScope::new([('a', 1), ('b', 3)]);
        let err = move_item(&mut scope, Positioned::new('b', 3), Direction::Up).unwrap_err();
        assert_eq!(err, ReorderError::NoNeighbor { sort_order: 2 });
    }

    #[test]
    fn test_append_positions() {
        assert_eq!(next_position(0), 1);
        assert_eq!(next_position(3), 4);
        assert_eq!(append_positions(0, 3).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(append_positions(2, 2).collect::<Vec<_>>(), vec![3, 4]);
        assert_eq!(append_positions(5, 0).count(), 0);
    }

    #[test]
    fn test_close_gap_shifts_only_trailing_rows() {
        let mut scope = MemoryScope::sequential(['a', 'b', 'c', 'd']);
        let removed = scope.remove('b').unwrap();
        let moved = close_gap(&mut scope, removed).unwrap();
        assert_eq!(moved, 2);
        assert_eq!(orders(&scope), vec![('a', 1), ('c', 2), ('d', 3)]);
    }

    #[test]
    fn test_compact_only_writes_changed_rows() {
        let mut scope = MemoryScope::new([('a', 1), ('b', 3), ('c', 4), ('d', 7)]);
        let touched = compact(&mut scope).unwrap();
        assert_eq!(touched, 3);
        assert_eq!(orders(&scope), vec![('a', 1), ('b', 2), ('c', 3), ('d', 4)]);
    }

    #[test]
    fn test_compact_contiguous_scope_is_untouched() {
        let mut scope = MemoryScope::sequential(['a', 'b', 'c']);
        assert_eq!(compact(&mut scope).unwrap(), 0);
        assert_eq!(scope.writes(), 0);
    }

    #[test]
    fn test_push_appends_after_last() {
        let mut scope = MemoryScope::sequential(['a', 'b']);
        assert_eq!(scope.push('c'), 3);
        assert_eq!(scope.ordered_ids(), vec!['a', 'b', 'c']);
    }
}
