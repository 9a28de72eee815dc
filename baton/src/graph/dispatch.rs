//! Run-local stack of dispatchers for return-to-dispatcher edges.
//!
//! The run loop pushes the current node's id when it transitions into a node whose
//! edge is `ReturnToDispatcher`, and pops it when that node finishes. Kept separate
//! from `SharedState::last_sender`, which only records attribution.

#[derive(Debug, Default)]
pub(crate) struct DispatchStack {
    frames: Vec<String>,
}

impl DispatchStack {
    pub(crate) fn push(&mut self, dispatcher: &str, callee: &str) {
        tracing::debug!(dispatcher, callee, depth = self.frames.len() + 1, "dispatch");
        self.frames.push(dispatcher.to_string());
    }

    pub(crate) fn pop(&mut self, callee: &str) -> Option<String> {
        let dispatcher = self.frames.pop();
        tracing::debug!(callee, dispatcher = ?dispatcher, "return to dispatcher");
        dispatcher
    }

    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        self.frames.len()
    }
}
