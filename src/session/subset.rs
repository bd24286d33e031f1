//! Previewable subset of a file list

use crate::classify::{FileDescriptor, is_previewable};
use serde::Serialize;

/// Direction of a swipe or arrow navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigateDirection {
    /// Previous file
    Prev,
    /// Next file
    Next,
}

/// Ordered positions of the previewable files in a list
///
/// Swipe navigation and the "2 / 5" counter run over this subset, so
/// non-previewable entries are skipped while staying addressable by raw
/// index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PreviewableSubset {
    indices: Vec<usize>,
}

impl PreviewableSubset {
    /// Build the subset for a file list
    #[must_use]
    pub fn from_files(files: &[FileDescriptor]) -> Self {
        Self {
            indices: files
                .iter()
                .enumerate()
                .filter(|(_, file)| is_previewable(file))
                .map(|(index, _)| index)
                .collect(),
        }
    }

    /// Number of previewable files
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether no file is previewable
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Original indices, in order
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Position within the subset of a raw index
    #[must_use]
    pub fn position_of(&self, raw_index: usize) -> Option<usize> {
        self.indices.binary_search(&raw_index).ok()
    }

    /// Raw index reached by stepping once from `current`
    ///
    /// Wraps around at both ends. Returns `None` when the subset has fewer
    /// than two members or the step would land on `current` itself. When
    /// `current` is not previewable the nearest previewable entry in the
    /// requested direction is chosen.
    #[must_use]
    pub fn step(&self, current: usize, direction: NavigateDirection) -> Option<usize> {
        let len = self.indices.len();
        if len < 2 {
            return None;
        }

        let target = match (self.position_of(current), direction) {
            (Some(pos), NavigateDirection::Next) => self.indices[(pos + 1) % len],
            (Some(pos), NavigateDirection::Prev) => self.indices[(pos + len - 1) % len],
            (None, NavigateDirection::Next) => self
                .indices
                .iter()
                .copied()
                .find(|&index| index > current)
                .unwrap_or(self.indices[0]),
            (None, NavigateDirection::Prev) => self
                .indices
                .iter()
                .rev()
                .copied()
                .find(|&index| index < current)
                .unwrap_or(self.indices[len - 1]),
        };

        (target != current).then_some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{document, image};

    #[test]
    fn test_subset_skips_documents() {
        let files = vec![image("a"), document("b"), image("c")];
        let subset = PreviewableSubset::from_files(&files);

        assert_eq!(subset.indices(), &[0, 2]);
        assert_eq!(subset.position_of(2), Some(1));
        assert_eq!(subset.position_of(1), None);
    }

    #[test]
    fn test_step_wraps_both_ways() {
        let files = vec![image("a"), image("b"), image("c")];
        let subset = PreviewableSubset::from_files(&files);

        assert_eq!(subset.step(2, NavigateDirection::Next), Some(0));
        assert_eq!(subset.step(0, NavigateDirection::Prev), Some(2));
        assert_eq!(subset.step(1, NavigateDirection::Next), Some(2));
    }

    #[test]
    fn test_step_noop_for_small_subsets() {
        let single = PreviewableSubset::from_files(&[image("a"), document("b")]);
        assert_eq!(single.step(0, NavigateDirection::Next), None);
        assert_eq!(single.step(0, NavigateDirection::Prev), None);

        let empty = PreviewableSubset::from_files(&[document("a")]);
        assert_eq!(empty.step(0, NavigateDirection::Next), None);
    }

    #[test]
    fn test_step_from_non_previewable_entry() {
        let files = vec![image("a"), document("b"), document("c"), image("d")];
        let subset = PreviewableSubset::from_files(&files);

        assert_eq!(subset.step(1, NavigateDirection::Next), Some(3));
        assert_eq!(subset.step(2, NavigateDirection::Prev), Some(0));
    }

    #[test]
    fn test_step_from_non_previewable_wraps() {
        let files = vec![document("x"), image("a"), image("b"), document("y")];
        let subset = PreviewableSubset::from_files(&files);

        assert_eq!(subset.step(3, NavigateDirection::Next), Some(1));
        assert_eq!(subset.step(0, NavigateDirection::Prev), Some(2));
    }
}
