use gage_calendar_domain::{Entity, ID};
use std::sync::{Mutex, MutexGuard};

/// Useful functions for creating inmemory repositories

fn lock<T>(collection: &Mutex<Vec<T>>) -> MutexGuard<'_, Vec<T>> {
    // A panic while holding the lock leaves the vec itself intact
    collection
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn insert<T: Clone>(val: &T, collection: &Mutex<Vec<T>>) {
    lock(collection).push(val.clone());
}

pub fn find<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    lock(collection)
        .iter()
        .find(|item| item.id() == val_id)
        .cloned()
}

pub fn find_by<T: Clone, F: FnMut(&T) -> bool>(collection: &Mutex<Vec<T>>, mut compare: F) -> Vec<T> {
    lock(collection)
        .iter()
        .filter(|item| compare(item))
        .cloned()
        .collect()
}
