//! Destinations for [`Warning`]s.
//!
//! Scanning never blocks on or fails because of a sink: [`WarningSink::warning`]
//! takes `&self` and returns nothing, so implementations that need to record
//! state use interior mutability or hand the warning off elsewhere.
//!
//! | Sink | Behavior |
//! |------|----------|
//! | [`NoopSink`] | Discards everything (the default) |
//! | [`CollectingSink`] | Buffers warnings in the order observed |
//! | [`ChannelSink`] | Sends warnings over an `mpsc` channel |
//! | [`TracingSink`] | Emits a `tracing` event per warning |
//! | [`FnSink`] | Calls a closure |

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::warning::Warning;

/// Receives warnings as they are observed.
pub trait WarningSink {
    fn warning(&self, warning: Warning);
}

impl<S: WarningSink + ?Sized> WarningSink for &S {
    fn warning(&self, warning: Warning) {
        (**self).warning(warning)
    }
}

impl<S: WarningSink + ?Sized> WarningSink for Box<S> {
    fn warning(&self, warning: Warning) {
        (**self).warning(warning)
    }
}

impl<S: WarningSink + ?Sized> WarningSink for Arc<S> {
    fn warning(&self, warning: Warning) {
        (**self).warning(warning)
    }
}

/// Discards every warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl WarningSink for NoopSink {
    fn warning(&self, _warning: Warning) {}
}

/// Buffers warnings so callers can inspect them after a parse or render.
///
/// ```rust
/// use tincture_markup::{CollectingSink, Parser, Warning};
///
/// let sink = CollectingSink::new();
/// Parser::new(&sink).parse("Hello</blue>");
///
/// assert_eq!(
///     sink.take(),
///     vec![Warning::UnopenedMarkup { tag: "blue".into(), index: 5 }]
/// );
/// ```
#[derive(Debug, Default)]
pub struct CollectingSink {
    warnings: Mutex<Vec<Warning>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Warning>> {
        // A panic while pushing cannot leave the Vec half-written.
        self.warnings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns a copy of the warnings collected so far.
    pub fn warnings(&self) -> Vec<Warning> {
        self.lock().clone()
    }

    /// Removes and returns the collected warnings.
    pub fn take(&self) -> Vec<Warning> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Returns true if an equal warning has been collected.
    pub fn contains(&self, warning: &Warning) -> bool {
        self.lock().iter().any(|w| w == warning)
    }
}

impl WarningSink for CollectingSink {
    fn warning(&self, warning: Warning) {
        self.lock().push(warning);
    }
}

/// Forwards warnings to another thread over a channel.
///
/// Sending is fire-and-forget: if the receiver has been dropped the warning
/// is discarded.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    sender: Sender<Warning>,
}

impl ChannelSink {
    /// Creates a sink and the receiving end of its channel.
    pub fn new() -> (Self, Receiver<Warning>) {
        let (sender, receiver) = mpsc::channel();
        (Self { sender }, receiver)
    }

    /// Wraps an existing sender.
    pub fn from_sender(sender: Sender<Warning>) -> Self {
        Self { sender }
    }
}

impl WarningSink for ChannelSink {
    fn warning(&self, warning: Warning) {
        let _ = self.sender.send(warning);
    }
}

/// Emits each warning as a `tracing` event at WARN level.
///
/// Events use the `tincture` target and carry the warning kind and, when
/// present, its character index as structured fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warning(&self, warning: Warning) {
        match warning.index() {
            Some(index) => tracing::warn!(
                target: "tincture",
                kind = warning.kind().as_str(),
                index,
                "{}",
                warning
            ),
            None => tracing::warn!(
                target: "tincture",
                kind = warning.kind().as_str(),
                "{}",
                warning
            ),
        }
    }
}

/// Adapts a closure into a [`WarningSink`].
///
/// ```rust
/// use std::cell::Cell;
/// use tincture_markup::{FnSink, Parser};
///
/// let count = Cell::new(0);
/// let sink = FnSink(|_warning| count.set(count.get() + 1));
/// Parser::new(&sink).parse("<>");
/// assert_eq!(count.get(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnSink<F>(pub F);

impl<F: Fn(Warning)> WarningSink for FnSink<F> {
    fn warning(&self, warning: Warning) {
        (self.0)(warning)
    }
}
