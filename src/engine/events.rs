//! Deploy observation buffer
//!
//! "Player deployed" notifications arrive asynchronously relative to the
//! spawn request that caused them. Event handlers submit observations into
//! this bounded channel without blocking, and the engine owner drains it on
//! its own thread and feeds each record to the engine's event sink.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use crate::util::vec3::Vec3;

/// One observed deploy: a player and where they ended up
#[derive(Debug, Clone)]
pub struct DeployEvent<P> {
    pub player: P,
    pub position: Vec3,
}

/// Bounded buffer of deploy observations
pub struct DeployBuffer<P> {
    /// Sender side - cloned to each event handler
    sender: Sender<DeployEvent<P>>,
    /// Receiver side - drained by the engine owner
    receiver: Receiver<DeployEvent<P>>,
    capacity: usize,
}

impl<P> DeployBuffer<P> {
    /// Create a new buffer with given capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self {
            sender,
            receiver,
            capacity,
        }
    }

    /// Create a new sender handle for an event handler
    pub fn sender(&self) -> DeploySender<P> {
        DeploySender {
            sender: self.sender.clone(),
        }
    }

    /// Try to submit an observation (non-blocking)
    ///
    /// Returns true if successful, false if the buffer is full
    #[inline]
    pub fn try_submit(&self, player: P, position: Vec3) -> bool {
        self.sender.try_send(DeployEvent { player, position }).is_ok()
    }

    /// Drain all pending observations
    pub fn drain(&self) -> Vec<DeployEvent<P>> {
        self.receiver.try_iter().collect()
    }

    /// Get number of pending observations
    #[inline]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }

    /// Check if buffer is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    /// Get buffer capacity
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<P> Default for DeployBuffer<P> {
    fn default() -> Self {
        // Deploys arrive at most once per player per wave; 256 covers a
        // full lobby with room for stragglers
        Self::new(256)
    }
}

/// Clonable sender handle for event handlers
pub struct DeploySender<P> {
    sender: Sender<DeployEvent<P>>,
}

impl<P> Clone for DeploySender<P> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<P> DeploySender<P> {
    /// Submit an observation (non-blocking)
    #[inline]
    pub fn try_send(&self, player: P, position: Vec3) -> Result<(), DeployBufferError> {
        self.sender
            .try_send(DeployEvent { player, position })
            .map_err(|e| match e {
                TrySendError::Full(_) => DeployBufferError::Full,
                TrySendError::Disconnected(_) => DeployBufferError::Disconnected,
            })
    }
}

/// Deploy buffer errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployBufferError {
    /// Buffer is full (backpressure)
    Full,
    /// Channel disconnected (buffer dropped)
    Disconnected,
}
