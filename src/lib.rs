pub mod de;
mod errors;
mod page;
mod query;
pub mod validation;
pub use self::errors::Error;
pub use self::page::Page;
pub use self::query::{Ordering, QueryOptions};
