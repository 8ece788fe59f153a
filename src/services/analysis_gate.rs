use crate::error::AppError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// At most one analysis request may be in flight. The frontend disables the
/// trigger control for the same window, but the gate is the authoritative
/// check.
#[derive(Clone)]
pub struct AnalysisGate {
    in_flight: Arc<AtomicBool>,
}

impl AnalysisGate {
    pub fn new() -> Self {
        Self {
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Claim the in-flight slot. The returned guard releases it on drop, so
    /// every exit path (success, server error, panic unwind) re-opens the
    /// gate.
    pub fn try_begin(&self) -> Result<InFlightGuard, AppError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err("Analysis already in progress".into());
        }
        Ok(InFlightGuard {
            flag: self.in_flight.clone(),
        })
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Relaxed)
    }
}

impl Default for AnalysisGate {
    fn default() -> Self {
        Self::new()
    }
}

pub struct InFlightGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
