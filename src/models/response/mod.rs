//! API projections of mailbox state.

pub mod message_summary;
pub mod view_response;
