// Internal marker for dead ends during propagation and search.
// It carries no data on purpose: a contradiction only ever means
// "prune this branch", never an error surfaced to the caller.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Unsolvable;
