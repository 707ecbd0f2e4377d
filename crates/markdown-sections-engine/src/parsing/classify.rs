use super::kinds::CodeFence;

/// Where a line sits relative to fenced code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceState {
    /// Not in a fence and not a marker.
    Outside,
    /// The marker line that opened a fence.
    Opening,
    /// Fence content, including marker lines with trailing text.
    Inside,
    /// The bare marker line that closed a fence.
    Closing,
}

impl FenceState {
    /// Whether the line may be read as a list item. Only fence content is
    /// raw; both marker lines are ordinary lines.
    pub fn allows_list_marker(self) -> bool {
        !matches!(self, FenceState::Inside)
    }

    /// Whether the line may start a section. The opening marker is already
    /// inside the fence for this purpose.
    pub fn allows_heading(self) -> bool {
        matches!(self, FenceState::Outside | FenceState::Closing)
    }
}

/// Fence-tracking scan over raw lines.
///
/// One classifier is used per independent traversal: the section split gets
/// its own scan and every block parse starts a fresh one. A fence left open at
/// the end of input stays open; the remaining lines are all `Inside`.
#[derive(Debug, Default)]
pub struct LineClassifier {
    in_fence: bool,
}

impl LineClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_fence(&self) -> bool {
        self.in_fence
    }

    /// Classifies the next line of the scan and advances the fence state.
    pub fn classify(&mut self, line: &str) -> FenceState {
        match CodeFence::marker(line) {
            Some(_) if !self.in_fence => {
                self.in_fence = true;
                FenceState::Opening
            }
            Some(marker) if CodeFence::closes(line, marker) => {
                self.in_fence = false;
                FenceState::Closing
            }
            _ if self.in_fence => FenceState::Inside,
            _ => FenceState::Outside,
        }
    }
}
