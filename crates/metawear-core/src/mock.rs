//! Recording sink for testing.
//!
//! [`RecordingSink`] stands in for the transport. It keeps every frame it
//! is given so tests can compare them against expected bytes.
//!
//! # Features
//!
//! - **Frame capture**: inspect every frame, the last frame, or decode them
//! - **Failure injection**: fail every send, or only the next few

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::frame::Frame;
use crate::led::LedCommand;
use crate::traits::{AsyncCommandSink, CommandSink};

/// A sink that records frames instead of sending them.
///
/// Implements both [`CommandSink`] and [`AsyncCommandSink`].
///
/// # Example
///
/// ```
/// use metawear_core::{Led, RecordingSink};
///
/// let led = Led::new(RecordingSink::new());
/// led.play().unwrap();
///
/// assert_eq!(led.sink().last_bytes(), Some(vec![0x02, 0x01, 0x01]));
/// ```
pub struct RecordingSink {
    frames: Mutex<Vec<Frame>>,
    should_fail: AtomicBool,
    fail_message: Mutex<String>,
    /// Number of sends still to fail before succeeding again.
    remaining_failures: AtomicU32,
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RecordingSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingSink")
            .field("frames", &self.frame_count())
            .field("should_fail", &self.should_fail.load(Ordering::Relaxed))
            .finish()
    }
}

impl RecordingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self {
            frames: Mutex::new(Vec::new()),
            should_fail: AtomicBool::new(false),
            fail_message: Mutex::new("Mock failure".to_string()),
            remaining_failures: AtomicU32::new(0),
        }
    }

    /// Every frame received so far, oldest first.
    pub fn frames(&self) -> Vec<Frame> {
        self.lock_frames().clone()
    }

    /// The most recent frame.
    pub fn last_frame(&self) -> Option<Frame> {
        self.lock_frames().last().cloned()
    }

    /// The most recent frame's bytes.
    pub fn last_bytes(&self) -> Option<Vec<u8>> {
        self.last_frame().map(|f| f.to_vec())
    }

    /// Number of frames received.
    pub fn frame_count(&self) -> usize {
        self.lock_frames().len()
    }

    /// Forget every recorded frame.
    pub fn clear(&self) {
        self.lock_frames().clear();
    }

    /// Decode the most recent frame as an LED command.
    pub fn last_led_command(&self) -> Option<Result<LedCommand>> {
        self.last_frame()
            .map(|frame| LedCommand::decode(frame.as_bytes()))
    }

    /// Decode every recorded frame as an LED command.
    pub fn led_commands(&self) -> Result<Vec<LedCommand>> {
        self.lock_frames()
            .iter()
            .map(|frame| LedCommand::decode(frame.as_bytes()))
            .collect()
    }

    /// Make every send fail until reset.
    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::Relaxed);
    }

    /// Set the message carried by injected failures.
    pub fn set_fail_message(&self, message: &str) {
        *self
            .fail_message
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = message.to_string();
    }

    /// Fail the next `count` sends, then succeed.
    pub fn fail_next(&self, count: u32) {
        self.remaining_failures.store(count, Ordering::Relaxed);
    }

    fn lock_frames(&self) -> MutexGuard<'_, Vec<Frame>> {
        self.frames.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_should_fail(&self) -> Result<()> {
        let transient = self
            .remaining_failures
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1))
            .is_ok();

        if transient || self.should_fail.load(Ordering::Relaxed) {
            let message = self
                .fail_message
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone();
            return Err(Error::Sink(message));
        }
        Ok(())
    }

    fn record(&self, frame: &Frame) -> Result<()> {
        self.check_should_fail()?;
        self.lock_frames().push(frame.clone());
        Ok(())
    }
}

impl CommandSink for RecordingSink {
    fn send(&self, frame: &Frame) -> Result<()> {
        self.record(frame)
    }
}

#[async_trait]
impl AsyncCommandSink for RecordingSink {
    async fn send_async(&self, frame: &Frame) -> Result<()> {
        self.record(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::led::LedCommandBuilder;

    fn play_frame() -> Frame {
        LedCommandBuilder::new().play().unwrap()
    }

    #[test]
    fn test_records_in_order() {
        let sink = RecordingSink::new();
        let builder = LedCommandBuilder::new();
        sink.send(&builder.play().unwrap()).unwrap();
        sink.send(&builder.stop(true).unwrap()).unwrap();

        assert_eq!(sink.frame_count(), 2);
        assert_eq!(sink.frames()[0].as_bytes(), &[0x02, 0x01, 0x01]);
        assert_eq!(sink.last_bytes(), Some(vec![0x02, 0x02, 0x01]));
        assert_eq!(
            sink.led_commands().unwrap(),
            vec![LedCommand::Play, LedCommand::Stop { clear: true }]
        );
    }

    #[test]
    fn test_empty_sink() {
        let sink = RecordingSink::default();
        assert!(sink.last_frame().is_none());
        assert!(sink.last_led_command().is_none());
        assert!(sink.led_commands().unwrap().is_empty());
    }

    #[test]
    fn test_clear() {
        let sink = RecordingSink::new();
        sink.send(&play_frame()).unwrap();
        sink.clear();
        assert_eq!(sink.frame_count(), 0);
    }

    #[test]
    fn test_should_fail() {
        let sink = RecordingSink::new();
        sink.set_should_fail(true);
        sink.set_fail_message("link down");

        let err = sink.send(&play_frame()).unwrap_err();
        assert_eq!(err, Error::Sink("link down".to_string()));
        assert_eq!(sink.frame_count(), 0);

        sink.set_should_fail(false);
        assert!(sink.send(&play_frame()).is_ok());
        assert_eq!(sink.frame_count(), 1);
    }

    #[test]
    fn test_transient_failures() {
        let sink = RecordingSink::new();
        sink.fail_next(2);

        assert!(sink.send(&play_frame()).is_err());
        assert!(sink.send(&play_frame()).is_err());
        assert!(sink.send(&play_frame()).is_ok());
        assert_eq!(sink.frame_count(), 1);
    }

    #[test]
    fn test_last_led_command_reports_foreign_frames() {
        let sink = RecordingSink::new();
        sink.send(&Frame::parse(&[0x13, 0x01, 0x01]).unwrap()).unwrap();
        assert!(matches!(sink.last_led_command(), Some(Err(_))));
        assert!(sink.led_commands().is_err());
    }

    #[test]
    fn test_debug() {
        let sink = RecordingSink::new();
        sink.send(&play_frame()).unwrap();
        let debug_str = format!("{:?}", sink);
        assert!(debug_str.contains("RecordingSink"));
        assert!(debug_str.contains("frames: 1"));
    }

    #[tokio::test]
    async fn test_async_send_records() {
        let sink = RecordingSink::new();
        sink.send_async(&play_frame()).await.unwrap();
        assert_eq!(sink.last_led_command(), Some(Ok(LedCommand::Play)));
    }

    #[tokio::test]
    async fn test_async_send_fails() {
        let sink = RecordingSink::new();
        sink.fail_next(1);
        assert!(sink.send_async(&play_frame()).await.is_err());
        assert_eq!(sink.frame_count(), 0);
    }

    #[test]
    fn test_shared_across_threads() {
        let sink = std::sync::Arc::new(RecordingSink::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let sink = std::sync::Arc::clone(&sink);
                std::thread::spawn(move || {
                    for _ in 0..10 {
                        sink.send(&play_frame()).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(sink.frame_count(), 40);
        assert!(sink.frames().iter().all(|f| f.as_bytes() == [0x02, 0x01, 0x01]));
    }
}
