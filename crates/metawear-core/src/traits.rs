//! Transport abstractions.
//!
//! Frames leave this crate through a sink. The sink owns delivery: ordering,
//! retries and serializing writes to the physical link are its job. Nothing
//! here assumes a particular BLE stack.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::frame::Frame;

/// Accepts finished frames and delivers them to the board.
///
/// # Example
///
/// ```
/// use std::sync::Mutex;
///
/// use metawear_core::{CommandSink, Frame, Result};
///
/// struct Capture(Mutex<Vec<u8>>);
///
/// impl CommandSink for Capture {
///     fn send(&self, frame: &Frame) -> Result<()> {
///         self.0.lock().unwrap().extend_from_slice(frame.as_bytes());
///         Ok(())
///     }
/// }
/// ```
pub trait CommandSink {
    /// Deliver one frame.
    fn send(&self, frame: &Frame) -> Result<()>;
}

impl<S: CommandSink + ?Sized> CommandSink for &S {
    fn send(&self, frame: &Frame) -> Result<()> {
        (**self).send(frame)
    }
}

impl<S: CommandSink + ?Sized> CommandSink for Arc<S> {
    fn send(&self, frame: &Frame) -> Result<()> {
        (**self).send(frame)
    }
}

/// Async counterpart of [`CommandSink`] for transports whose writes are
/// futures (most BLE stacks).
#[async_trait]
pub trait AsyncCommandSink: Send + Sync {
    /// Deliver one frame.
    async fn send_async(&self, frame: &Frame) -> Result<()>;
}

#[async_trait]
impl<S: AsyncCommandSink + ?Sized> AsyncCommandSink for Arc<S> {
    async fn send_async(&self, frame: &Frame) -> Result<()> {
        (**self).send_async(frame).await
    }
}
