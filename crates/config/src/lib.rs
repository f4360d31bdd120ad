//! Configuration for the EBADBLOG static blog.
//!
//! [`Config`] holds the declarative settings handed to the site generator.
//! [`Config::resolve`] combines them with an [`Environment`] snapshot to
//! produce the immutable [`SiteConfig`] for one generator run.

mod config;
mod deploy;
mod env;
mod error;
mod feed;
mod markdown;
mod site;
mod slug;
mod theme;

pub use self::config::*;
pub use self::deploy::*;
pub use self::env::*;
pub use self::error::*;
pub use self::feed::*;
pub use self::markdown::*;
pub use self::site::*;
pub use self::slug::*;
pub use self::theme::*;

pub type RelPath = relative_path::RelativePathBuf;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
