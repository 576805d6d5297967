//! Step-through navigation over ranked candidate paths

/// Tracks how many candidate paths are currently revealed.
///
/// Invariant: `0 <= revealed_count <= path_count`. Starts at zero so nothing
/// is drawn until the user steps forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealController {
    revealed_count: usize,
    path_count: usize,
}

impl RevealController {
    pub fn new(path_count: usize) -> Self {
        Self {
            revealed_count: 0,
            path_count,
        }
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    pub fn path_count(&self) -> usize {
        self.path_count
    }

    /// Reveal one more candidate. Saturates at `path_count`.
    pub fn advance(&mut self) -> usize {
        self.revealed_count = (self.revealed_count + 1).min(self.path_count);
        self.revealed_count
    }

    /// Hide the most recently revealed candidate. Saturates at zero.
    pub fn retreat(&mut self) -> usize {
        self.revealed_count = self.revealed_count.saturating_sub(1);
        self.revealed_count
    }

    pub fn can_advance(&self) -> bool {
        self.revealed_count < self.path_count
    }

    pub fn can_retreat(&self) -> bool {
        self.revealed_count > 0
    }

    /// The revealed prefix of `paths`
    pub fn visible<'a, T>(&self, paths: &'a [T]) -> &'a [T] {
        &paths[..self.revealed_count.min(paths.len())]
    }
}
