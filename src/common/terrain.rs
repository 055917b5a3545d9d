use super::TerrainError;

use std::collections::{HashMap, HashSet};

pub type RoomId = usize;

/// Usage state of a corridor as seen from one of its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corridor {
    /// Claimed by a path that enters this room through it; walkable backwards only.
    Reversed,
    /// Claimed by a path that leaves this room through it.
    Blocked,
    /// Free in both directions.
    Stable,
}

impl Corridor {
    /// Weight added when a search crosses the corridor from this side.
    pub(crate) fn cost(self) -> isize {
        match self {
            Corridor::Reversed => -1,
            Corridor::Blocked => 0,
            Corridor::Stable => 1,
        }
    }
}

// One record per corridor, so both endpoint views are always duals.
#[derive(Debug, Clone)]
struct Edge {
    ends: (RoomId, RoomId),
    claimed_from: Option<RoomId>,
}

impl Edge {
    fn state_from(&self, room: RoomId) -> Corridor {
        match self.claimed_from {
            None => Corridor::Stable,
            Some(tail) if tail == room => Corridor::Blocked,
            Some(_) => Corridor::Reversed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Room {
    pub name: String,
    pub coords: Option<(i64, i64)>,
    links: Vec<(RoomId, usize)>, // (neighbor, edge index) in insertion order
    pub(crate) separated: bool,
}

#[cfg(test)]
impl Room {
    pub(crate) fn degree(&self) -> usize {
        self.links.len()
    }

    pub(crate) fn is_separated(&self) -> bool {
        self.separated
    }
}

/// Room arena of one colony. Rooms and corridors are addressed by index.
#[derive(Debug, Clone, Default)]
pub struct Terrain {
    rooms: Vec<Room>,
    names: HashMap<String, RoomId>,
    used_coords: HashSet<(i64, i64)>,
    edges: Vec<Edge>,
    edge_index: HashMap<(RoomId, RoomId), usize>,
    start: Option<RoomId>,
    end: Option<RoomId>,
}

impl Terrain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_room(
        &mut self,
        name: &str,
        coords: Option<(i64, i64)>,
    ) -> Result<RoomId, TerrainError> {
        if self.names.contains_key(name) {
            return Err(TerrainError::DuplicateRoom(name.to_string()));
        }
        if let Some(coords) = coords {
            if !self.used_coords.insert(coords) {
                return Err(TerrainError::DuplicateCoords(name.to_string()));
            }
        }

        let id = self.rooms.len();
        self.rooms.push(Room {
            name: name.to_string(),
            coords,
            links: Vec::new(),
            separated: false,
        });
        self.names.insert(name.to_string(), id);
        Ok(id)
    }

    /// Links two rooms by name. Returns `false` when they were already linked.
    pub fn add_corridor(&mut self, a: &str, b: &str) -> Result<bool, TerrainError> {
        if a == b {
            return Err(TerrainError::SelfLoop(a.to_string()));
        }
        let a = self.room_id(a).ok_or_else(|| TerrainError::UnknownRoom(a.to_string()))?;
        let b = self.room_id(b).ok_or_else(|| TerrainError::UnknownRoom(b.to_string()))?;
        Ok(self.link(a, b))
    }

    fn link(&mut self, a: RoomId, b: RoomId) -> bool {
        let key = (a.min(b), a.max(b));
        if self.edge_index.contains_key(&key) {
            return false;
        }
        let edge = self.edges.len();
        self.edges.push(Edge {
            ends: (a, b),
            claimed_from: None,
        });
        self.edge_index.insert(key, edge);
        self.rooms[a].links.push((b, edge));
        self.rooms[b].links.push((a, edge));
        true
    }

    pub fn set_start(&mut self, room: RoomId) {
        self.start = Some(room);
    }

    pub fn set_end(&mut self, room: RoomId) {
        self.end = Some(room);
    }

    pub fn start(&self) -> Option<RoomId> {
        self.start
    }

    pub fn end(&self) -> Option<RoomId> {
        self.end
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id]
    }

    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.names.get(name).copied()
    }

    pub fn name(&self, id: RoomId) -> &str {
        &self.rooms[id].name
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn corridor_count(&self) -> usize {
        self.edges.len()
    }

    /// Neighbors of `room` with the corridor state seen from `room`, in link order.
    pub fn neighbors(&self, room: RoomId) -> impl Iterator<Item = (RoomId, Corridor)> + '_ {
        self.rooms[room]
            .links
            .iter()
            .map(move |&(next, edge)| (next, self.edges[edge].state_from(room)))
    }

    pub fn corridor(&self, from: RoomId, to: RoomId) -> Option<Corridor> {
        self.edge_index
            .get(&(from.min(to), from.max(to)))
            .map(|&edge| self.edges[edge].state_from(from))
    }

    /// Claimed corridors as (tail, head) pairs.
    pub fn claimed_corridors(&self) -> impl Iterator<Item = (RoomId, RoomId)> + '_ {
        self.edges.iter().filter_map(|edge| {
            edge.claimed_from.map(|tail| {
                let (a, b) = edge.ends;
                if tail == a {
                    (a, b)
                } else {
                    (b, a)
                }
            })
        })
    }

    pub(crate) fn blocked_count(&self, room: RoomId) -> usize {
        self.neighbors(room)
            .filter(|&(_, corridor)| corridor == Corridor::Blocked)
            .count()
    }

    /// Marks the corridor as used by a path going `from` -> `to`.
    pub(crate) fn claim(&mut self, from: RoomId, to: RoomId) {
        if let Some(&edge) = self.edge_index.get(&(from.min(to), from.max(to))) {
            self.edges[edge].claimed_from = Some(from);
        }
    }

    pub(crate) fn release(&mut self, a: RoomId, b: RoomId) {
        if let Some(&edge) = self.edge_index.get(&(a.min(b), a.max(b))) {
            self.edges[edge].claimed_from = None;
        }
    }

    pub(crate) fn set_separated(&mut self, room: RoomId, separated: bool) {
        self.rooms[room].separated = separated;
    }
}
