// Domain layer modules
pub mod insert_result;
pub mod movie_record;

// Re-exports
pub use insert_result::{InsertResult, SUCCESS_MESSAGE};
pub use movie_record::{
    DEFAULT_TITLE, DEFAULT_YEAR, MovieRecord, Payload, PayloadError, PayloadPresence,
};
