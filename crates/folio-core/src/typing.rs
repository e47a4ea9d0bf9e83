/// Lifecycle of a [`TypingSequence`]. A sequence runs exactly once and is
/// immutable after `Complete`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    Complete,
}

/// Character-at-a-time reveal of a fixed string.
///
/// Pure state machine: the caller owns the cadence (a timer, a test loop)
/// and calls [`advance`](TypingSequence::advance) once per step. The reveal
/// count is monotonic, counted in characters so multi-byte text never
/// splits a code point, and ends exactly at the full source length.
#[derive(Clone, Debug)]
pub struct TypingSequence {
    source: String,
    revealed: usize,
    phase: Phase,
}

impl TypingSequence {
    /// Start a sequence at zero revealed characters. An empty source has
    /// zero steps and starts out `Complete`.
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let phase = if source.is_empty() {
            Phase::Complete
        } else {
            Phase::Running
        };
        Self {
            source,
            revealed: 0,
            phase,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Characters revealed so far.
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Caret is shown while the sequence is still typing.
    pub fn show_caret(&self) -> bool {
        self.phase == Phase::Running
    }

    /// The currently visible prefix, recomputed from the reveal count.
    pub fn snapshot(&self) -> &str {
        match self.source.char_indices().nth(self.revealed) {
            Some((byte_offset, _)) => &self.source[..byte_offset],
            None => &self.source,
        }
    }

    /// Reveal one more character and return the new snapshot, or `None`
    /// once the sequence has completed. Calling after completion is a no-op.
    pub fn advance(&mut self) -> Option<&str> {
        if self.phase == Phase::Complete {
            return None;
        }
        self.revealed += 1;
        if self.revealed >= self.source.chars().count() {
            self.phase = Phase::Complete;
        }
        Some(self.snapshot())
    }
}
