// Availability probe: poll the books collection until the API answers or
// the attempt budget runs out. The delay between attempts is fixed.

use std::thread;
use std::time::Duration;

use indicatif::ProgressBar;
use serde::de::IgnoredAny;
use tracing::{debug, info, warn};

use crate::api::{LibraryApi, BOOKS_PATH};

/// How many times to try and how long to wait between tries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbePolicy {
    pub attempts: u32,
    pub delay: Duration,
}

impl Default for ProbePolicy {
    fn default() -> Self {
        ProbePolicy {
            attempts: 15,
            delay: Duration::from_secs(2),
        }
    }
}

/// Returns `true` as soon as `GET /api/books` succeeds, `false` once
/// `policy.attempts` requests have failed. Each failed attempt leaves a
/// line above the spinner; the spinner itself is cleared before returning.
pub fn wait_for_api<A: LibraryApi>(
    api: &A,
    policy: &ProbePolicy,
    progress: &ProgressBar,
) -> bool {
    progress.enable_steady_tick(Duration::from_millis(120));
    for attempt in 1..=policy.attempts {
        progress.set_message(format!("Intento {attempt}/{} …", policy.attempts));
        match api.fetch_all::<IgnoredAny>(BOOKS_PATH) {
            Ok(_) => {
                info!(attempt, "library API is reachable");
                progress.finish_and_clear();
                return true;
            }
            Err(err) => {
                debug!(attempt, error = %err, "library API not ready");
                progress.println(retry_line(attempt, policy));
                thread::sleep(policy.delay);
            }
        }
    }

    warn!(attempts = policy.attempts, "library API never became reachable");
    progress.finish_and_clear();
    false
}

/// Line printed after a failed attempt.
pub fn retry_line(attempt: u32, policy: &ProbePolicy) -> String {
    format!(
        "   Intento {attempt}/{} — reintentando en {:.1}s …",
        policy.attempts,
        policy.delay.as_secs_f32()
    )
}
