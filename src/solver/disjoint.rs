use super::Solver;
use crate::algorithm::{calc_steps, fast_calc_steps, search_round, Round, SearchState};
use crate::common::{are_disjoint, collect_claimed_paths, Path, Solution, SolveError, Terrain};
use crate::stat::Stats;

use std::time::Instant;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    /// Accepted, more paths may still help.
    Improved,
    /// Accepted and nothing can beat it.
    Optimal,
    Rejected,
}

/// Best path set accepted so far.
#[derive(Debug, Default)]
struct Incumbent {
    steps: usize,
    paths: Vec<Path>,
}

impl Incumbent {
    /// Takes `paths` if they do not slow the colony down and their longest path
    /// actually carries ants.
    fn offer(&mut self, ants: usize, paths: Vec<Path>) -> Verdict {
        let lengths: Vec<usize> = paths.iter().map(Path::len).collect();
        let (steps, longest_used) = fast_calc_steps(ants, &lengths);
        debug!("candidate set {lengths:?}: {steps} steps, longest used {longest_used}");

        if self.steps != 0 && (self.steps < steps || !longest_used) {
            return Verdict::Rejected;
        }
        self.steps = steps;
        self.paths = paths;
        // Nothing beats a direct corridor.
        if steps == 1 {
            Verdict::Optimal
        } else {
            Verdict::Improved
        }
    }
}

/// Grows a set of disjoint start -> end paths one augmenting round at a time
/// until another path stops paying off.
pub struct DisjointPathSolver {
    terrain: Terrain,
    ants: usize,
    stats: Stats,
}

impl DisjointPathSolver {
    pub fn new(terrain: &Terrain, ants: usize) -> Self {
        DisjointPathSolver {
            terrain: terrain.clone(),
            ants,
            stats: Stats::default(),
        }
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }
}

impl Solver for DisjointPathSolver {
    fn solve(&mut self) -> Result<Solution, SolveError> {
        let total_solve_start_time = Instant::now();
        let start = self.terrain.start().ok_or(SolveError::MissingStart)?;
        let end = self.terrain.end().ok_or(SolveError::MissingEnd)?;
        if start == end {
            return Err(SolveError::SameStartEnd);
        }
        if self.ants < 1 || isize::try_from(self.ants).is_err() {
            return Err(SolveError::InvalidAntCount(self.ants));
        }

        // Rounds rewrite corridor states, so each solve works on its own copy.
        let mut terrain = self.terrain.clone();
        let mut state = SearchState::new(terrain.room_count());
        let mut incumbent = Incumbent::default();
        self.stats = Stats::default();

        loop {
            self.stats.rounds += 1;
            match search_round(&mut terrain, &mut state, start, end, &mut self.stats) {
                Round::Augmented => {}
                Round::Exhausted => break,
                Round::Inconsistent => {
                    warn!("round {} left a broken parent chain, keeping previous paths", self.stats.rounds);
                    break;
                }
            }

            let Some(paths) = collect_claimed_paths(&terrain, start, end)
                .filter(|paths| are_disjoint(paths, &terrain, start, end))
            else {
                warn!("round {} claimed corridors are not disjoint paths, keeping previous paths", self.stats.rounds);
                break;
            };
            debug!("claimed corridors: {}", terrain.claimed_corridors().count());

            match incumbent.offer(self.ants, paths) {
                Verdict::Improved => self.stats.accepted_rounds += 1,
                Verdict::Optimal => {
                    self.stats.accepted_rounds += 1;
                    break;
                }
                Verdict::Rejected => break,
            }
        }

        if incumbent.paths.is_empty() {
            return Err(SolveError::NoRoute);
        }

        let mut paths = incumbent.paths;
        paths.sort_by_key(Path::len);
        let lengths: Vec<usize> = paths.iter().map(Path::len).collect();
        let (steps, distribution) = calc_steps(self.ants, &lengths);
        debug!("final lengths {lengths:?}, distribution {distribution:?}");

        self.stats.paths = paths.len();
        self.stats.steps = steps;
        self.stats.time_us = total_solve_start_time.elapsed().as_micros() as usize;

        Ok(Solution {
            ants: self.ants,
            steps,
            paths,
            distribution,
        })
    }
}
