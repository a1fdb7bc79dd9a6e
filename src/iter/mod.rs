mod in_order;
mod into_iter;
mod pre_order;

pub use in_order::*;
pub use into_iter::*;
pub use pre_order::*;
