use crate::common::{Solution, Terrain};

use std::collections::VecDeque;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy)]
struct Ant {
    id: usize,
    path: usize,
    position: usize, // index into the path's rooms
}

/// One line per step, each listing the moves `L<ant>-<room>` made in that step.
///
/// Ants already walking move first, in launch order, then every path with
/// ants left launches one more.
pub fn render_moves(terrain: &Terrain, solution: &Solution) -> Vec<String> {
    let mv = |id: usize, room: usize| format!("L{}-{}", id, terrain.name(room));

    // Direct corridor: the whole colony crosses in one step.
    if let Some(path) = solution.paths.iter().find(|path| path.len() == 1) {
        let moves: Vec<String> = (1..=solution.ants).map(|id| mv(id, path.rooms[1])).collect();
        return vec![moves.join(" ")];
    }

    let mut remaining = solution.distribution.clone();
    let mut walking: VecDeque<Ant> = VecDeque::new();
    let mut next_id = 1;
    let mut lines = Vec::with_capacity(solution.steps);

    while !walking.is_empty() || remaining.iter().any(|&left| left > 0) {
        let mut moves = Vec::new();

        for _ in 0..walking.len() {
            let Some(mut ant) = walking.pop_front() else {
                break;
            };
            let rooms = &solution.paths[ant.path].rooms;
            ant.position += 1;
            moves.push(mv(ant.id, rooms[ant.position]));
            if ant.position + 1 < rooms.len() {
                walking.push_back(ant);
            }
        }

        for (path, left) in remaining.iter_mut().enumerate() {
            if *left == 0 {
                continue;
            }
            *left -= 1;
            let ant = Ant {
                id: next_id,
                path,
                position: 1,
            };
            next_id += 1;
            moves.push(mv(ant.id, solution.paths[path].rooms[1]));
            walking.push_back(ant);
        }

        lines.push(moves.join(" "));
    }

    lines
}

pub fn write_moves<W: Write>(w: &mut W, terrain: &Terrain, solution: &Solution) -> io::Result<()> {
    for line in render_moves(terrain, solution) {
        writeln!(w, "{line}")?;
    }
    Ok(())
}
