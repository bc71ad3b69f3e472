use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

/// Named accessor pair for one field of `R`
pub struct Field<R, V> {
    pub name: &'static str,
    get: fn(&R) -> V,
    set: fn(&mut R, V),
}

impl<R, V> Clone for Field<R, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, V> Copy for Field<R, V> {}

impl<R, V> Field<R, V> {
    pub fn new(name: &'static str, get: fn(&R) -> V, set: fn(&mut R, V)) -> Self {
        Self { name, get, set }
    }

    pub fn get(&self, record: &R) -> V {
        (self.get)(record)
    }

    pub fn set(&self, record: &mut R, value: V) {
        (self.set)(record, value)
    }

    pub fn read<C: RecordCell<R>>(&self, cell: &C) -> V {
        cell.read(|r| self.get(r))
    }

    pub fn write<C: RecordCell<R>>(&self, cell: &C, value: V) {
        cell.write(|r| self.set(r, value))
    }
}

/// Shared, mutable home of one record
pub trait RecordCell<R>: Clone + 'static {
    fn read<T>(&self, f: impl FnOnce(&R) -> T) -> T;
    fn write(&self, f: impl FnOnce(&mut R));

    /// Like `read`, but subscribes the running effect where the cell is reactive
    fn observe<T>(&self, f: impl FnOnce(&R) -> T) -> T {
        self.read(f)
    }
}

impl<R: Send + Sync + 'static> RecordCell<R> for RwSignal<R> {
    fn read<T>(&self, f: impl FnOnce(&R) -> T) -> T {
        self.with_untracked(f)
    }

    fn observe<T>(&self, f: impl FnOnce(&R) -> T) -> T {
        self.with(f)
    }

    fn write(&self, f: impl FnOnce(&mut R)) {
        self.update(f)
    }
}

impl<R: 'static> RecordCell<R> for Rc<RefCell<R>> {
    fn read<T>(&self, f: impl FnOnce(&R) -> T) -> T {
        f(&self.borrow())
    }

    fn write(&self, f: impl FnOnce(&mut R)) {
        f(&mut self.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default)]
    struct Row {
        tips: String,
    }

    #[test]
    fn test_field_reads_and_writes_cell() {
        let tips = Field::new("tips", |r: &Row| r.tips.clone(), |r, v| r.tips = v);
        let cell = Rc::new(RefCell::new(Row::default()));
        tips.write(&cell, "fragile".to_string());
        assert_eq!(tips.read(&cell), "fragile");
        assert_eq!(tips.name, "tips");
    }
}
