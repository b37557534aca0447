pub mod borrow;
pub mod deposit;
pub mod initialize;
pub mod repay;

// Anchor resolves the generated `__client_accounts_*` modules from the crate root
pub use borrow::*;
pub use deposit::*;
pub use initialize::*;
pub use repay::*;
