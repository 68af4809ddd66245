pub mod governance;
pub mod vesting;

pub use governance::*;
pub use vesting::*;
