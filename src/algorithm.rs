mod distribution;
mod queue;
mod suurballe;

pub use distribution::calc_steps;
pub(crate) use distribution::fast_calc_steps;
pub(crate) use suurballe::{search_round, Round, SearchState};
