pub mod formula;
pub mod theorem;

pub use formula::Formula;
pub use theorem::{ProvenTheorem, Sequent, TheoremLibrary};
