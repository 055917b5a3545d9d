use super::{Corridor, RoomId, Terrain};

use std::collections::HashSet;
use tracing::debug;

/// Rooms from start to end, both included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path {
    pub rooms: Vec<RoomId>,
}

impl Path {
    pub fn new(rooms: Vec<RoomId>) -> Self {
        Path { rooms }
    }

    /// Number of corridors walked.
    pub fn len(&self) -> usize {
        self.rooms.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn names<'a>(&self, terrain: &'a Terrain) -> Vec<&'a str> {
        self.rooms.iter().map(|&room| terrain.name(room)).collect()
    }
}

/// Checks that `paths` run start -> end over existing corridors and share no room
/// besides start and end.
pub(crate) fn are_disjoint(paths: &[Path], terrain: &Terrain, start: RoomId, end: RoomId) -> bool {
    let mut seen = HashSet::new();
    for path in paths {
        if path.rooms.first() != Some(&start) || path.rooms.last() != Some(&end) || path.is_empty() {
            return false;
        }
        if path
            .rooms
            .windows(2)
            .any(|pair| terrain.corridor(pair[0], pair[1]).is_none())
        {
            return false;
        }
        let inner = &path.rooms[1..path.rooms.len() - 1];
        if inner
            .iter()
            .any(|&room| room == start || room == end || !seen.insert(room))
        {
            return false;
        }
    }
    true
}

/// Walks claimed corridors from `start` and returns one path per claimed exit.
/// `None` when the claimed corridors do not form start -> end chains.
pub(crate) fn collect_claimed_paths(terrain: &Terrain, start: RoomId, end: RoomId) -> Option<Vec<Path>> {
    let mut paths = Vec::new();
    for (first, corridor) in terrain.neighbors(start) {
        if corridor != Corridor::Blocked {
            continue;
        }
        let mut rooms = vec![start, first];
        let mut current = first;
        while current != end {
            if rooms.len() > terrain.room_count() {
                debug!("claimed chain from {} loops", terrain.name(first));
                return None;
            }
            let (next, _) = terrain
                .neighbors(current)
                .find(|&(_, corridor)| corridor == Corridor::Blocked)?;
            rooms.push(next);
            current = next;
        }
        paths.push(Path::new(rooms));
    }
    Some(paths)
}

/// Final answer of one solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub ants: usize,
    pub steps: usize,
    /// Disjoint paths, shortest first.
    pub paths: Vec<Path>,
    /// Ants sent down each path, aligned with `paths`.
    pub distribution: Vec<usize>,
}

impl Solution {
    pub fn verify(&self, terrain: &Terrain) -> bool {
        let (Some(start), Some(end)) = (terrain.start(), terrain.end()) else {
            return false;
        };
        if !are_disjoint(&self.paths, terrain, start, end) {
            return false;
        }
        if self.distribution.len() != self.paths.len()
            || self.distribution.iter().sum::<usize>() != self.ants
        {
            return false;
        }
        if self.steps == 1 {
            return self.paths.iter().any(|path| path.len() == 1);
        }
        self.paths
            .iter()
            .zip(&self.distribution)
            .all(|(path, &ants)| ants <= (self.steps + 1).saturating_sub(path.len()))
    }
}
