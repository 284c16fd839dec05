//! Animation session: routine -> client -> delay, until done or stopped

use core::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use tokio::sync::Notify;

use crate::{
    client::{Deliver, DeliveryError},
    routine::Routine,
    to_std_duration,
};

/// How many steps a session may run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunLimit {
    /// Until the routine is exhausted or the session is stopped
    #[default]
    Forever,
    Steps(u64),
}

impl RunLimit {
    fn reached(self, steps: u64) -> bool {
        match self {
            Self::Forever => false,
            Self::Steps(limit) => steps >= limit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running,
}

#[derive(Debug, Default)]
struct StopInner {
    /// Stop requests so far
    requests: AtomicU32,
    notify: Notify,
}

/// Cloneable handle asking a running session to stop
///
/// The session checks it before every step and while sleeping. A request
/// in flight is not interrupted; callers count repeated requests through the
/// value [`StopSignal::stop`] returns and escalate themselves.
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    inner: Arc<StopInner>,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the signal. Returns how many times it has been raised,
    /// this call included.
    pub fn stop(&self) -> u32 {
        let requests = self.inner.requests.fetch_add(1, Ordering::SeqCst).saturating_add(1);
        self.inner.notify.notify_waiters();
        requests
    }

    pub fn is_stopped(&self) -> bool {
        self.requests() > 0
    }

    pub fn requests(&self) -> u32 {
        self.inner.requests.load(Ordering::SeqCst)
    }

    /// Resolves once [`StopSignal::stop`] has been called
    pub async fn stopped(&self) {
        loop {
            let notified = self.inner.notify.notified();
            if self.is_stopped() {
                return;
            }
            notified.await;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    pub limit: RunLimit,
    /// Entropy seeded when unset
    pub seed: Option<u64>,
}

/// Outcome of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionReport {
    /// Steps taken, pauses included
    pub steps: u64,
    pub commands_sent: u64,
    /// Set if the run ended because of the stop signal
    pub stopped: bool,
}

impl fmt::Display for SessionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} steps, {} commands sent{}",
            self.steps,
            self.commands_sent,
            if self.stopped { ", stopped" } else { "" }
        )
    }
}

/// Drives one routine against one client
pub struct Session<D> {
    client: D,
    routine: Box<dyn Routine>,
    rng: StdRng,
    limit: RunLimit,
    state: SessionState,
}

impl<D: Deliver> Session<D> {
    pub fn new(client: D, routine: Box<dyn Routine>, config: SessionConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self {
            client,
            routine,
            rng,
            limit: config.limit,
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn client(&self) -> &D {
        &self.client
    }

    pub fn into_client(self) -> D {
        self.client
    }

    /// Run until the routine ends, the run limit is hit, `stop` is raised or
    /// a delivery fails. The session is idle again when this returns.
    pub async fn run(&mut self, stop: &StopSignal) -> Result<SessionReport, DeliveryError> {
        self.state = SessionState::Running;
        info!("session: running {} ({:?})", self.routine.name(), self.limit);
        let result = self.drive(stop).await;
        self.state = SessionState::Idle;
        match &result {
            Ok(report) => info!("session: idle after {}", report),
            Err(err) => info!("session: idle after error: {}", err),
        }
        result
    }

    async fn drive(&mut self, stop: &StopSignal) -> Result<SessionReport, DeliveryError> {
        let mut report = SessionReport::default();
        loop {
            if stop.is_stopped() {
                report.stopped = true;
                break;
            }
            if self.limit.reached(report.steps) {
                break;
            }
            let Some(step) = self.routine.next_step(&mut self.rng) else {
                break;
            };

            if let Some(command) = &step.command {
                self.client.deliver(command).await?;
                report.commands_sent += 1;
            }
            report.steps += 1;
            if self.limit.reached(report.steps) {
                break;
            }

            let delay = step.delay.sample(&mut self.rng);
            if delay.as_ticks() == 0 {
                continue;
            }
            debug!("session: sleeping {}ms", delay.as_millis());
            tokio::select! {
                () = tokio::time::sleep(to_std_duration(delay)) => {}
                () = stop.stopped() => {
                    report.stopped = true;
                    break;
                }
            }
        }
        Ok(report)
    }
}
