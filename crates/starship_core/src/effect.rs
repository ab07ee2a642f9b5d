#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the whole catalog from scratch, tagging every event with `load_id`.
    LoadCatalog { load_id: crate::LoadId },
}
