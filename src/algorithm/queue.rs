use crate::common::RoomId;

use std::collections::VecDeque;

/// Which side of a room a search label belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Side {
    /// Reached through a free corridor.
    Out,
    /// Reached while entering a room that already sits on a claimed path.
    In,
}

impl Side {
    pub(crate) fn index(self) -> usize {
        match self {
            Side::Out => 0,
            Side::In => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QueueEntry {
    pub(crate) room: RoomId,
    pub(crate) weight: isize,
    pub(crate) side: Side,
}

/// Open list kept sorted by weight; equal weights leave in insertion order.
///
/// There is no decrease-key: an improved label is pushed again and the caller's
/// label checks make the older entry harmless. Weights are path lengths, so a
/// sorted list is enough.
#[derive(Debug, Default)]
pub(crate) struct WeightedQueue {
    entries: VecDeque<QueueEntry>,
}

impl WeightedQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, room: RoomId, weight: isize, side: Side) {
        let at = self.entries.partition_point(|entry| entry.weight <= weight);
        self.entries.insert(at, QueueEntry { room, weight, side });
    }

    pub(crate) fn pop(&mut self) -> Option<QueueEntry> {
        self.entries.pop_front()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
