//! Single-owner-thread guard for non-reentrant ephemeris backends.
//!
//! Requests travel over a bounded crossbeam channel to a dedicated thread
//! that owns the backend; each caller waits for its reply with a timeout.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, SendTimeoutError, Sender};
use tracing::{debug, warn};

use unse_core::errors::EphemerisError;
use unse_core::models::{Body, BodyPosition};
use unse_core::traits::EphemerisBackend;

/// Pending requests the owner thread may hold before callers block.
const QUEUE_CAPACITY: usize = 256;

type Reply = Result<BodyPosition, EphemerisError>;

struct Request {
    jd_ut: f64,
    body: Body,
    reply: Sender<Reply>,
}

/// Serializes every position call through one owner thread.
pub struct SerializedEphemeris {
    sender: Option<Sender<Request>>,
    handle: Option<JoinHandle<()>>,
    timeout: Duration,
    backend_name: &'static str,
}

impl SerializedEphemeris {
    /// Spawn the owner thread. Fails only if the OS refuses the thread.
    pub fn spawn(
        backend: Arc<dyn EphemerisBackend>,
        timeout: Duration,
    ) -> Result<Self, EphemerisError> {
        let backend_name = backend.name();
        let (sender, receiver) = bounded::<Request>(QUEUE_CAPACITY);
        let handle = thread::Builder::new()
            .name(format!("unse-ephemeris-{backend_name}"))
            .spawn(move || Self::owner_loop(backend, receiver))
            .map_err(|_| EphemerisError::Unavailable)?;
        debug!(backend = backend_name, "ephemeris owner thread started");
        Ok(Self {
            sender: Some(sender),
            handle: Some(handle),
            timeout,
            backend_name,
        })
    }

    fn owner_loop(backend: Arc<dyn EphemerisBackend>, receiver: Receiver<Request>) {
        for request in receiver {
            let result = backend.position(request.jd_ut, request.body);
            // The caller may have timed out and dropped its receiver.
            let _ = request.reply.send(result);
        }
    }

    /// Position lookup with the configured timeout on both enqueue and reply.
    pub fn position(&self, jd_ut: f64, body: Body) -> Result<BodyPosition, EphemerisError> {
        let sender = self.sender.as_ref().ok_or(EphemerisError::Unavailable)?;
        let (reply_tx, reply_rx) = bounded::<Reply>(1);
        let timeout_ms = self.timeout.as_millis() as u64;

        sender
            .send_timeout(
                Request {
                    jd_ut,
                    body,
                    reply: reply_tx,
                },
                self.timeout,
            )
            .map_err(|e| match e {
                SendTimeoutError::Timeout(_) => EphemerisError::Timeout { timeout_ms },
                SendTimeoutError::Disconnected(_) => EphemerisError::Unavailable,
            })?;

        match reply_rx.recv_timeout(self.timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => {
                warn!(backend = self.backend_name, timeout_ms, "ephemeris call timed out");
                Err(EphemerisError::Timeout { timeout_ms })
            }
            Err(RecvTimeoutError::Disconnected) => Err(EphemerisError::Unavailable),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend_name
    }
}

impl Drop for SerializedEphemeris {
    fn drop(&mut self) {
        // Closing the channel ends the owner loop.
        drop(self.sender.take());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
