use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::config::Method;
use crate::state::StateId;

#[derive(Debug)]
pub(crate) struct Queued {
    priority: f64,
    seq: u64,
    id: StateId,
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        // intentionally reversed for BinaryHeap, equal priorities are popped in insertion order
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}

/// States waiting to be visited.
#[derive(Debug)]
pub(crate) enum Frontier {
    Queue(VecDeque<StateId>),
    Stack(Vec<StateId>),
    Heap(BinaryHeap<Queued>, u64),
}

impl Frontier {
    pub(crate) fn new(method: Method) -> Self {
        match method {
            Method::BreadthFirst => Frontier::Queue(VecDeque::new()),
            Method::DepthFirst => Frontier::Stack(Vec::new()),
            Method::UniformCost | Method::Greedy | Method::AStar => {
                Frontier::Heap(BinaryHeap::new(), 0)
            }
        }
    }

    /// `priority` is ignored by the uninformed methods, lower is popped first otherwise.
    pub(crate) fn push(&mut self, id: StateId, priority: f64) {
        match self {
            Frontier::Queue(queue) => queue.push_back(id),
            Frontier::Stack(stack) => stack.push(id),
            Frontier::Heap(heap, seq) => {
                heap.push(Queued {
                    priority,
                    seq: *seq,
                    id,
                });
                *seq += 1;
            }
        }
    }

    pub(crate) fn pop(&mut self) -> Option<StateId> {
        match self {
            Frontier::Queue(queue) => queue.pop_front(),
            Frontier::Stack(stack) => stack.pop(),
            Frontier::Heap(heap, _) => heap.pop().map(|queued| queued.id),
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Frontier::Queue(queue) => queue.len(),
            Frontier::Stack(stack) => stack.len(),
            Frontier::Heap(heap, _) => heap.len(),
        }
    }
}
