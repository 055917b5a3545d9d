use super::queue::{Side, WeightedQueue};
use crate::common::{Corridor, RoomId, Terrain};
use crate::stat::Stats;

use tracing::{debug, instrument, trace, warn};

#[derive(Debug, Clone, Copy, Default)]
struct Label {
    visit_in: bool,
    visit_out: bool,
    parent_in: Option<RoomId>,
    parent_out: Option<RoomId>,
    weight: [isize; 2], // indexed by Side
}

impl Label {
    fn visited(&self) -> bool {
        self.visit_in || self.visit_out
    }
}

/// Per-room scratch of one search round.
#[derive(Debug)]
pub(crate) struct SearchState {
    labels: Vec<Label>,
}

impl SearchState {
    pub(crate) fn new(room_count: usize) -> Self {
        SearchState {
            labels: vec![Label::default(); room_count],
        }
    }

    pub(crate) fn reset(&mut self) {
        for label in self.labels.iter_mut().filter(|label| label.visited()) {
            *label = Label::default();
        }
    }

    fn reached(&self, room: RoomId) -> bool {
        self.labels[room].visited()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Round {
    /// A path was found and its corridors were reversed into the claimed set.
    Augmented,
    /// `end` cannot be reached any more.
    Exhausted,
    /// The parent chain could not be walked back to `start`; corridor states are unreliable.
    Inconsistent,
}

/// One augmenting round: label-setting search from `start`, then edge reversal
/// along the found path (Suurballe on unit weights).
#[instrument(skip_all, name = "search_round", fields(round = stats.rounds), level = "debug")]
pub(crate) fn search_round(
    terrain: &mut Terrain,
    state: &mut SearchState,
    start: RoomId,
    end: RoomId,
    stats: &mut Stats,
) -> Round {
    let mut queue = WeightedQueue::new();
    let label = &mut state.labels[start];
    label.visit_in = true;
    label.visit_out = true;
    queue.push(start, 0, Side::Out);

    while !state.reached(end) {
        let Some(current) = queue.pop() else {
            break;
        };
        stats.expanded_rooms += 1;
        trace!(
            "expand {} ({:?}, weight {}), {} queued",
            terrain.name(current.room),
            current.side,
            current.weight,
            queue.len()
        );

        for (next, corridor) in terrain.neighbors(current.room) {
            // A room entered on its in side may only leave backwards along its own path.
            if corridor == Corridor::Blocked
                || (current.side == Side::In && corridor == Corridor::Stable)
            {
                continue;
            }
            let separated = terrain.room(next).separated;
            add_next(state, &mut queue, current.room, next, separated, current.weight, corridor);
        }
    }

    if !state.reached(end) {
        debug!("no augmenting path");
        return Round::Exhausted;
    }

    let reversed = replace_edges(terrain, state, start, end);
    state.reset();
    terrain.set_separated(start, false);
    terrain.set_separated(end, false);
    if reversed {
        Round::Augmented
    } else {
        Round::Inconsistent
    }
}

fn add_next(
    state: &mut SearchState,
    queue: &mut WeightedQueue,
    current: RoomId,
    next: RoomId,
    separated: bool,
    weight: isize,
    corridor: Corridor,
) {
    let label = &mut state.labels[next];
    let weight = weight + corridor.cost();
    let (out, inn) = (Side::Out.index(), Side::In.index());

    if !label.visited() {
        if separated {
            label.visit_in = true;
            label.parent_in = Some(current);
            label.weight[inn] = weight;
            // A free corridor into a claimed room only reaches its in side.
            if corridor == Corridor::Stable {
                queue.push(next, weight, Side::In);
                return;
            }
        }
        label.visit_out = true;
        label.parent_out = Some(current);
        label.weight[out] = weight;
        queue.push(next, weight, Side::Out);
        return;
    }

    if !separated {
        if weight >= label.weight[out] {
            return;
        }
        label.parent_out = Some(current);
        label.weight[out] = weight;
        queue.push(next, weight, Side::Out);
        return;
    }

    if corridor == Corridor::Stable {
        if label.visit_in && weight >= label.weight[inn] {
            return;
        }
        label.visit_in = true;
        label.parent_in = Some(current);
        label.weight[inn] = weight;
        queue.push(next, weight, Side::In);
        return;
    }

    if !label.visit_in || weight < label.weight[inn] {
        label.visit_in = true;
        label.parent_in = Some(current);
        label.weight[inn] = weight;
        queue.push(next, weight, Side::In);
    }
    if !label.visit_out || weight < label.weight[out] {
        label.visit_out = true;
        label.parent_out = Some(current);
        label.weight[out] = weight;
        queue.push(next, weight, Side::Out);
    }
}

/// Walks parents back from `end`, claiming free corridors and cancelling
/// corridors the new path runs against. Returns `false` if the walk breaks off.
fn replace_edges(terrain: &mut Terrain, state: &SearchState, start: RoomId, end: RoomId) -> bool {
    let mut room = end;
    // A room can be passed once per side.
    let mut budget = 2 * terrain.room_count();

    while room != start {
        if budget == 0 {
            warn!("parent chain from {} does not reach start", terrain.name(end));
            return false;
        }
        budget -= 1;

        let label = state.labels[room];
        let parent = match (label.parent_in, label.parent_out) {
            (Some(parent_in), Some(parent_out)) => {
                if terrain.blocked_count(room) > 1 {
                    if terrain.corridor(room, parent_out) == Some(Corridor::Blocked) {
                        parent_out
                    } else {
                        parent_in
                    }
                } else if terrain.corridor(room, parent_in) == Some(Corridor::Stable) {
                    parent_in
                } else {
                    parent_out
                }
            }
            (Some(parent), None) | (None, Some(parent)) => parent,
            (None, None) => {
                warn!("room {} has no parent", terrain.name(room));
                return false;
            }
        };

        if terrain.corridor(room, parent) == Some(Corridor::Stable) {
            terrain.set_separated(parent, true);
            terrain.set_separated(room, true);
            terrain.claim(parent, room);
        } else {
            terrain.set_separated(parent, false);
            terrain.release(parent, room);
        }
        room = parent;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(names: &[&str], links: &[(&str, &str)]) -> Terrain {
        let mut terrain = Terrain::new();
        for name in names {
            terrain.add_room(name, None).unwrap();
        }
        for (a, b) in links {
            terrain.add_corridor(a, b).unwrap();
        }
        terrain
    }

    fn id(terrain: &Terrain, name: &str) -> RoomId {
        terrain.room_id(name).unwrap()
    }

    #[test]
    fn test_first_round_claims_shortest_path() {
        let mut terrain = build(
            &["start", "a", "b", "c", "end"],
            &[("start", "a"), ("a", "b"), ("b", "end"), ("start", "c"), ("c", "end")],
        );
        let (start, end) = (id(&terrain, "start"), id(&terrain, "end"));
        let mut state = SearchState::new(terrain.room_count());
        let stats = &mut Stats::default();

        assert_eq!(search_round(&mut terrain, &mut state, start, end, stats), Round::Augmented);

        let c = id(&terrain, "c");
        assert_eq!(terrain.corridor(start, c), Some(Corridor::Blocked));
        assert_eq!(terrain.corridor(end, c), Some(Corridor::Reversed));
        assert_eq!(terrain.corridor(start, id(&terrain, "a")), Some(Corridor::Stable));
        assert!(terrain.room(c).is_separated());
        assert!(!terrain.room(start).is_separated());
        assert!(!terrain.room(end).is_separated());
        assert!(state.labels.iter().all(|label| !label.visited()));
    }

    #[test]
    fn test_exhausted_when_end_unreachable() {
        let mut terrain = build(&["start", "a", "end"], &[("start", "a")]);
        let mut state = SearchState::new(terrain.room_count());
        let stats = &mut Stats::default();
        assert_eq!(search_round(&mut terrain, &mut state, 0, 2, stats), Round::Exhausted);
        assert_eq!(terrain.claimed_corridors().count(), 0);
    }

    // The shortest path start-r1-r2-end blocks both vertex-disjoint routes;
    // the second round has to cancel r1-r2.
    #[test]
    fn test_second_round_cancels_shared_corridor() {
        let mut terrain = build(
            &["start", "r1", "r2", "r3", "r4", "r5", "r6", "end"],
            &[
                ("start", "r1"),
                ("r1", "r2"),
                ("r2", "end"),
                ("start", "r3"),
                ("r3", "r6"),
                ("r6", "r2"),
                ("r1", "r4"),
                ("r4", "r5"),
                ("r5", "end"),
            ],
        );
        let (start, end) = (id(&terrain, "start"), id(&terrain, "end"));
        let (r1, r2) = (id(&terrain, "r1"), id(&terrain, "r2"));
        let mut state = SearchState::new(terrain.room_count());
        let stats = &mut Stats::default();

        assert_eq!(search_round(&mut terrain, &mut state, start, end, stats), Round::Augmented);
        assert_eq!(terrain.corridor(r1, r2), Some(Corridor::Blocked));
        assert_eq!(terrain.claimed_corridors().count(), 3);

        assert_eq!(search_round(&mut terrain, &mut state, start, end, stats), Round::Augmented);
        assert_eq!(terrain.corridor(r1, r2), Some(Corridor::Stable));
        assert_eq!(terrain.claimed_corridors().count(), 8);
        assert_eq!(terrain.blocked_count(start), 2);

        assert_eq!(search_round(&mut terrain, &mut state, start, end, stats), Round::Exhausted);
    }
}
