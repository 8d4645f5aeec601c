//!
//! doodletone lets you sketch on a small canvas and then plays the sketch back as sound.
//!
//! The canvas image is scanned column by column.
//! Every column that contains ink becomes one sine tone whose pitch corresponds to the average
//! vertical position of the ink in that column (marks near the top sound higher) and whose
//! start time corresponds to the column's horizontal position.
//!
//! The crate is organized around an explicit [`Session`](session::Session) which owns all
//! mutable drawing state, while the [`sinks`] module contains the output devices (an
//! interactive window behind the `windowing` feature and an audio output behind the `audio`
//! feature).
//!

pub mod canvas;
pub mod input;
pub mod palette;
pub mod session;
pub mod sinks;
pub mod sonify;
