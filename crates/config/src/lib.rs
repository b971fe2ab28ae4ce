mod config;
mod theme;

pub mod slug;

pub use self::config::*;
pub use self::theme::*;

pub type RelPath = relative_path::RelativePathBuf;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
