//! Records the store identifies by id.

/// Something the store keeps under a stable identifier.
///
/// Two snapshots of the same product (before and after an edit) are the same
/// entity even though their fields differ.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// Whether this record is the one stored under `id`.
    fn has_id(&self, id: &Self::Id) -> bool {
        self.id() == id
    }
}
