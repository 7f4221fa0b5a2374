//! The life briefing site's edge router. Requests for a few well-known pages are forwarded to a
//! raw-content mirror of the site's repository, and everything else is served from the static
//! assets.

pub mod assets;
pub mod config;
mod error;
pub mod mirror;
pub mod route;
pub mod router;

pub use assets::Assets;
pub use config::Config;
pub use error::Error;
pub use mirror::Mirror;
pub use route::Route;
pub use router::{app, handle, Env};
