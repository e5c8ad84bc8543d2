// Utils compartidos (sin DOM)

pub mod extend;
pub mod index;

pub use extend::*;
pub use index::*;
