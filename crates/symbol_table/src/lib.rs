mod check;
mod error;
mod impls;
mod iter;
mod navigate;
mod node;
mod table;

pub mod interval;

pub use error::{Error, Result};
pub use interval::IntervalTree;
pub use iter::{Iter, Range};
pub use table::{Balancing, SymbolTable};
