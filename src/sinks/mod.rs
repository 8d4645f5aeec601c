//!
//! Support for pushing a doodle session into various output devices
//!

#[cfg(feature = "audio")]
pub mod audio;
#[cfg(feature = "windowing")]
pub mod window;
