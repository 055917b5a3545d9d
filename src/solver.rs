mod disjoint;

pub use disjoint::DisjointPathSolver;

use crate::common::{Solution, SolveError};

pub trait Solver {
    fn solve(&mut self) -> Result<Solution, SolveError>;
}
