//! Domain types
//!
//! Wire DTOs follow the remote service's camelCase JSON exactly; the
//! remaining types model client-side state.

pub mod car;
pub mod contract;
pub mod cookie;
pub mod document;
pub mod filters;
pub mod model;
pub mod page;
pub mod session;
pub mod user;

pub use car::*;
pub use contract::*;
pub use cookie::{default_cookie_path, SessionCookie};
pub use document::*;
pub use filters::*;
pub use model::*;
pub use page::*;
pub use session::*;
pub use user::*;
