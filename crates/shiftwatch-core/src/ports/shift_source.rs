//! Shift source port (driven/secondary port)
//!
//! The scheduling UI and the hosted backend own shift storage. This port
//! is the narrow read interface the review workflow needs from them: one
//! call that returns a full snapshot of the current shifts.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because storage errors are adapter-specific
//!   (HTTP backend, file, in-memory) and don't need domain-level classification.
//! - There is no incremental API. Every review reloads the whole snapshot.

use std::sync::RwLock;

use crate::domain::Shift;

/// Port trait for loading the current shift collection
#[async_trait::async_trait]
pub trait IShiftSource: Send + Sync {
    /// Returns every shift currently scheduled, in storage order
    async fn load_shifts(&self) -> anyhow::Result<Vec<Shift>>;
}

/// Shift source backed by a vector, mutated through add/update/remove
///
/// Mirrors how the scheduling screen keeps its working copy of shifts.
#[derive(Debug, Default)]
pub struct InMemoryShiftSource {
    shifts: RwLock<Vec<Shift>>,
}

impl InMemoryShiftSource {
    pub fn new(shifts: Vec<Shift>) -> Self {
        Self {
            shifts: RwLock::new(shifts),
        }
    }

    /// Appends a shift
    pub fn add(&self, shift: Shift) {
        self.write().push(shift);
    }

    /// Replaces the shift with the same id; returns false if none matched
    pub fn update(&self, shift: Shift) -> bool {
        let mut shifts = self.write();
        match shifts.iter_mut().find(|s| s.id == shift.id) {
            Some(existing) => {
                *existing = shift;
                true
            }
            None => false,
        }
    }

    /// Removes the shift with the given id; returns false if none matched
    pub fn remove(&self, id: &crate::domain::ShiftId) -> bool {
        let mut shifts = self.write();
        let before = shifts.len();
        shifts.retain(|s| &s.id != id);
        shifts.len() != before
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Shift>> {
        self.shifts.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait::async_trait]
impl IShiftSource for InMemoryShiftSource {
    async fn load_shifts(&self) -> anyhow::Result<Vec<Shift>> {
        let shifts = self.shifts.read().unwrap_or_else(|e| e.into_inner());
        Ok(shifts.clone())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::ShiftId;

    fn shift(id: i64, name: &str) -> Shift {
        Shift::new(
            id,
            name,
            "Server",
            Utc.with_ymd_and_hms(2024, 3, 20, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 20, 13, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_add_update_remove() {
        let source = InMemoryShiftSource::default();
        source.add(shift(1, "Ana"));
        source.add(shift(2, "Ben"));

        assert!(source.update(shift(2, "Cleo")));
        assert!(!source.update(shift(9, "Nobody")));
        assert!(source.remove(&ShiftId::from(1)));
        assert!(!source.remove(&ShiftId::from(1)));

        let shifts = source.shifts.read().unwrap().clone();
        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].employee_name, "Cleo");
    }
}
