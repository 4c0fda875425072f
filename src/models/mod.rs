//! Typed records shared by the mailbox core and the HTTP layer.

pub mod email;
pub mod response;
