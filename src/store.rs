//! In-memory tables for classes and bookings.
//!
//! Every public method takes the table lock exactly once, so the capacity
//! check and the slot decrement in [`Store::book`] can never interleave with
//! another booking.

use std::sync::{Mutex, MutexGuard};

use thiserror::Error;
use uuid::Uuid;

use crate::models::{Booking, FitnessClass, NewClass};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("class {0} not found")]
    ClassNotFound(Uuid),
    #[error("class {0} has no slots available")]
    NoSlotsAvailable(Uuid),
    #[error("store lock poisoned")]
    Poisoned,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub class_id: Uuid,
    pub client_name: String,
    pub client_email: String,
}

#[derive(Default)]
struct Tables {
    classes: Vec<FitnessClass>,
    bookings: Vec<Booking>,
}

#[derive(Default)]
pub struct Store {
    tables: Mutex<Tables>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> Result<MutexGuard<'_, Tables>, StoreError> {
        self.tables.lock().map_err(|_| StoreError::Poisoned)
    }

    pub fn insert_class(&self, new: NewClass) -> Result<FitnessClass, StoreError> {
        let class = FitnessClass {
            id: Uuid::new_v4(),
            name: new.name,
            scheduled_at: new.scheduled_at,
            instructor: new.instructor,
            available_slots: new.available_slots,
        };
        self.tables()?.classes.push(class.clone());
        Ok(class)
    }

    pub fn get_class(&self, id: Uuid) -> Result<Option<FitnessClass>, StoreError> {
        Ok(self.tables()?.classes.iter().find(|c| c.id == id).cloned())
    }

    /// All classes in insertion order.
    pub fn list_classes(&self) -> Result<Vec<FitnessClass>, StoreError> {
        Ok(self.tables()?.classes.clone())
    }

    /// Takes one slot from the class and records the booking, or changes nothing.
    pub fn book(&self, new: NewBooking) -> Result<Booking, StoreError> {
        let mut tables = self.tables()?;
        let class = tables
            .classes
            .iter_mut()
            .find(|c| c.id == new.class_id)
            .ok_or(StoreError::ClassNotFound(new.class_id))?;
        class.available_slots = class
            .available_slots
            .checked_sub(1)
            .ok_or(StoreError::NoSlotsAvailable(new.class_id))?;

        let booking = Booking {
            id: Uuid::new_v4(),
            class_id: new.class_id,
            client_name: new.client_name,
            client_email: new.client_email,
        };
        tables.bookings.push(booking.clone());
        Ok(booking)
    }

    pub fn bookings_where<F>(&self, predicate: F) -> Result<Vec<Booking>, StoreError>
    where
        F: Fn(&Booking) -> bool,
    {
        Ok(self
            .tables()?
            .bookings
            .iter()
            .filter(|b| predicate(b))
            .cloned()
            .collect())
    }

    /// Exact, case-sensitive match on the client email.
    pub fn bookings_by_email(&self, email: &str) -> Result<Vec<Booking>, StoreError> {
        self.bookings_where(|b| b.client_email == email)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use chrono::{TimeZone, Utc};

    use super::*;

    fn new_class(slots: u32) -> NewClass {
        NewClass {
            name: "Yoga".to_string(),
            scheduled_at: Utc.with_ymd_and_hms(2025, 6, 15, 4, 30, 0).unwrap(),
            instructor: "Asha".to_string(),
            available_slots: slots,
        }
    }

    fn new_booking(class_id: Uuid, email: &str) -> NewBooking {
        NewBooking {
            class_id,
            client_name: "Ravi".to_string(),
            client_email: email.to_string(),
        }
    }

    #[test]
    fn test_insert_and_list_keep_order() {
        let store = Store::new();
        let first = store.insert_class(new_class(3)).unwrap();
        let second = store.insert_class(new_class(1)).unwrap();
        assert_ne!(first.id, second.id);

        let ids: Vec<Uuid> = store.list_classes().unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
        assert_eq!(store.get_class(second.id).unwrap(), Some(second));
        assert_eq!(store.get_class(Uuid::new_v4()).unwrap(), None);
    }

    #[test]
    fn test_book_decrements_until_empty() {
        let store = Store::new();
        let class = store.insert_class(new_class(2)).unwrap();

        store.book(new_booking(class.id, "a@example.com")).unwrap();
        store.book(new_booking(class.id, "b@example.com")).unwrap();
        assert_eq!(
            store.book(new_booking(class.id, "c@example.com")),
            Err(StoreError::NoSlotsAvailable(class.id))
        );

        let stored = store.get_class(class.id).unwrap().unwrap();
        assert_eq!(stored.available_slots, 0);
        assert!(store.bookings_by_email("c@example.com").unwrap().is_empty());
    }

    #[test]
    fn test_book_unknown_class() {
        let store = Store::new();
        store.insert_class(new_class(1)).unwrap();
        let missing = Uuid::new_v4();
        assert_eq!(
            store.book(new_booking(missing, "a@example.com")),
            Err(StoreError::ClassNotFound(missing))
        );
        assert!(store.bookings_where(|_| true).unwrap().is_empty());
    }

    #[test]
    fn test_bookings_by_email_is_exact() {
        let store = Store::new();
        let yoga = store.insert_class(new_class(5)).unwrap();
        let pilates = store.insert_class(new_class(5)).unwrap();

        store.book(new_booking(yoga.id, "asha@example.com")).unwrap();
        store.book(new_booking(pilates.id, "asha@example.com")).unwrap();
        store.book(new_booking(yoga.id, "Asha@example.com")).unwrap();

        let found = store.bookings_by_email("asha@example.com").unwrap();
        let class_ids: Vec<Uuid> = found.iter().map(|b| b.class_id).collect();
        assert_eq!(class_ids, vec![yoga.id, pilates.id]);
        assert!(store.bookings_by_email("nobody@example.com").unwrap().is_empty());
    }

    #[test]
    fn test_concurrent_bookings_never_oversell() {
        let store = Store::new();
        let class = store.insert_class(new_class(10)).unwrap();

        let successes: usize = thread::scope(|scope| {
            let handles: Vec<_> = (0..64)
                .map(|i| {
                    let store = &store;
                    scope.spawn(move || {
                        store
                            .book(new_booking(class.id, &format!("client{i}@example.com")))
                            .is_ok()
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap() as usize)
                .sum()
        });

        assert_eq!(successes, 10);
        assert_eq!(store.get_class(class.id).unwrap().unwrap().available_slots, 0);
        assert_eq!(store.bookings_where(|_| true).unwrap().len(), 10);
    }
}
