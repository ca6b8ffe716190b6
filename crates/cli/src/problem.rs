//! Problem definitions read by the CLI.

use permpack::d3::{BoxItem, Dimension};

/// A parsed enumeration problem.
#[derive(Debug, Clone)]
pub struct Problem {
    /// Problem name
    pub name: String,
    /// Container bound
    pub container: Dimension,
    /// Box types, in file order (the order defines type indices)
    pub items: Vec<BoxItem>,
}

impl Problem {
    /// Total number of box instances across all types.
    pub fn total_instances(&self) -> usize {
        self.items.iter().map(|i| i.count()).sum()
    }

    /// Display label for a type index.
    pub fn label(&self, type_index: usize) -> String {
        self.items
            .get(type_index)
            .and_then(|item| item.template().id())
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{}", type_index))
    }
}
