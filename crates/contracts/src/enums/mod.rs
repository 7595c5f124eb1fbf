pub mod lang;
pub mod order_status;
pub mod sort;

pub use lang::Lang;
pub use order_status::OrderStatus;
pub use sort::{SortDirection, SortField};
