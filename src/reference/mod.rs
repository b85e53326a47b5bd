mod loader;
mod table;

pub use table::{PercentRange, ReferenceRow, ReferenceTable};
