pub mod collection;
pub mod error;
pub mod grid;
pub mod options;
pub mod render;
pub mod session;
pub mod shell;
pub mod thumbnail;
pub mod words;

pub use collection::*;
pub use error::*;
pub use grid::*;
pub use options::*;
pub use session::*;
pub use thumbnail::*;

use semver::Version;

lazy_static::lazy_static! {
    pub static ref VERSION: Version = Version::parse(env!("CARGO_PKG_VERSION")).unwrap();
    pub static ref DEFAULT_TITLE: String = format!("iCY GALLERY {}", *VERSION);
}
