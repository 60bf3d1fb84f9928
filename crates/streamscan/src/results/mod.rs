//! # Result Adapters
//!
//! Owned, stream-global views of a match's groups and captures.
//!
//! The scan window mutates on every slide, so these views never borrow
//! window text: values are owned strings and positions carry the global
//! offset captured when the match was accepted. They are built lazily on
//! first access and memoized for the lifetime of the result they belong to.

pub mod stream_capture;
pub mod stream_group;

#[doc(inline)]
pub use stream_capture::{StreamCapture, StreamCaptureCollection};
#[doc(inline)]
pub use stream_group::{StreamGroup, StreamGroupCollection};
