pub(crate) const N_CELLS: usize = 81;
pub(crate) const N_HOUSES: usize = 27;

// One frame per cell bounds the search depth a priori
pub(crate) const MAX_SEARCH_DEPTH: usize = N_CELLS;
