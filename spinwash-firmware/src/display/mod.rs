//! Character display output
//!
//! The panel driver is an external collaborator; this build mirrors the
//! screen to the RTT log so the UI can be followed from the debug probe.

pub mod rtt;

pub use rtt::RttDisplay;
