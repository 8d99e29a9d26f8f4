mod ordering;
pub use self::ordering::Ordering;

mod options;
pub use self::options::QueryOptions;
