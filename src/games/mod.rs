//! Game variants and the session that plays them.

mod fevga;
mod giul;
mod session;

pub use fevga::Fevga;
pub use giul::Giul;
pub use session::{Session, SessionBuilder};
