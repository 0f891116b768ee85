pub mod jobs_api;
pub mod session_file;

pub use jobs_api::HttpJobBoardAdapter;
pub use session_file::FileSessionStore;
