//! Closure computations: subset enumeration, fixed-point closures and their reduction.

mod closure_computer;
pub use closure_computer::compute_closures;
pub use closure_computer::ClosureEntry;
pub use closure_computer::ClosureMap;

mod closure_reducer;
pub use closure_reducer::reduce_closures;
pub use closure_reducer::AbridgedClosureMap;

mod subsets;
pub use subsets::proper_subsets;
