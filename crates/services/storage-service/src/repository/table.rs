//! Per-family in-memory tables.
//!
//! Ids come from a monotonic counter owned by the table and are never
//! reused, even after deletes. Rows live in a `BTreeMap`, so iteration is in
//! id order, which is also insertion order.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use domain::{Id, Insertable, Record};

#[derive(Debug)]
pub(crate) struct Table<T> {
    rows: BTreeMap<Id, T>,
    next_id: Id,
}

impl<T: Record> Table<T> {
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Materialize `input` under the next id.
    pub fn insert<N>(&mut self, input: N, now: DateTime<Utc>) -> T
    where
        N: Insertable<Record = T>,
    {
        let record = input.into_record(self.next_id, now);
        self.next_id += 1;

        self.rows.insert(record.id(), record.clone());
        record
    }

    pub fn get(&self, id: Id) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    pub fn get_mut(&mut self, id: Id) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.values().find(|row| predicate(row)).cloned()
    }

    pub fn list(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|row| predicate(row)).cloned().collect()
    }

    pub fn remove(&mut self, id: Id) -> bool {
        self.rows.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Table holding at most one record per user.
///
/// Rows are keyed by the owning user id; the record's own id still comes
/// from a separate counter.
#[derive(Debug)]
pub(crate) struct UserKeyed<T> {
    rows: BTreeMap<Id, T>,
    next_id: Id,
}

impl<T: Clone> UserKeyed<T> {
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn get(&self, user_id: Id) -> Option<T> {
        self.rows.get(&user_id).cloned()
    }

    /// Mutable access to the user's record, creating it with `create` first
    /// when absent. `create` receives the freshly allocated record id.
    pub fn upsert(&mut self, user_id: Id, create: impl FnOnce(Id) -> T) -> &mut T {
        let next_id = &mut self.next_id;
        self.rows.entry(user_id).or_insert_with(|| {
            let id = *next_id;
            *next_id += 1;
            create(id)
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{NewForumPost, NewProduct, Product};

    fn product(name: &str) -> NewProduct {
        NewProduct {
            user_id: 1,
            name: name.to_string(),
            description: None,
            price: 100,
            image: None,
        }
    }

    #[test]
    fn test_ids_never_reused_after_delete() {
        let mut table: Table<Product> = Table::new();
        let now = Utc::now();

        let first = table.insert(product("a"), now);
        let second = table.insert(product("b"), now);
        let third = table.insert(product("c"), now);
        assert!(table.remove(second.id));
        let fourth = table.insert(product("d"), now);

        assert_eq!(
            [first.id, second.id, third.id, fourth.id],
            [1, 2, 3, 4]
        );
        assert_eq!(table.len(), 3);
        assert!(!table.remove(second.id));
    }

    #[test]
    fn test_list_is_insertion_ordered() {
        let mut table = Table::new();
        let now = Utc::now();
        for title in ["one", "two", "three"] {
            table.insert(
                NewForumPost {
                    user_id: 1,
                    title: title.to_string(),
                    content: "c".to_string(),
                    tags: Vec::new(),
                },
                now,
            );
        }

        let titles: Vec<String> = table.list().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, ["one", "two", "three"]);
    }

    #[test]
    fn test_user_keyed_upsert_creates_once() {
        let mut table: UserKeyed<(Id, Id, u32)> = UserKeyed::new();

        table.upsert(7, |id| (id, 7, 0)).2 += 1;
        table.upsert(7, |id| (id, 7, 0)).2 += 1;
        table.upsert(3, |id| (id, 3, 0));

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(7), Some((1, 7, 2)));
        assert_eq!(table.get(3), Some((2, 3, 0)));
    }
}
