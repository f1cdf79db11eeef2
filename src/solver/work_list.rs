use std::collections::{HashSet, VecDeque};

use crate::puzzle::Variable;

/// The AC-3 work queue of directed arcs `(x, y)`.
///
/// An arc already waiting in the queue is not enqueued a second time;
/// re-adding it would only repeat a revision that is already pending.
pub struct WorkList {
    queue: VecDeque<(Variable, Variable)>,
    queue_members: HashSet<(Variable, Variable)>,
}

impl WorkList {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            queue_members: HashSet::new(),
        }
    }

    pub fn push_back(&mut self, x: Variable, y: Variable) {
        let arc = (x, y);
        if !self.queue_members.contains(&arc) {
            self.queue_members.insert(arc.clone());
            self.queue.push_back(arc);
        }
    }

    pub fn pop_front(&mut self) -> Option<(Variable, Variable)> {
        let arc = self.queue.pop_front()?;
        self.queue_members.remove(&arc);
        Some(arc)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for WorkList {
    fn default() -> Self {
        Self::new()
    }
}
