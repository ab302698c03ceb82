mod client;
mod compose;
mod session;

pub use client::ClientError;
pub use compose::ComposeError;
pub use session::SessionError;
