use crate::utils::task::TaskSlot;
use chrono::{DateTime, Utc};
use leptos::*;
use std::time::Duration;

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Current time as a signal, refreshed every `period` while the owner lives.
/// Server rendering reads a single snapshot.
pub fn create_clock(period: Duration) -> ReadSignal<DateTime<Utc>> {
    let (now, set_now) = create_signal(Utc::now());
    if cfg!(target_arch = "wasm32") {
        TaskSlot::new().spawn(run_clock(set_now, period));
    }
    now
}

pub async fn run_clock(set_now: WriteSignal<DateTime<Utc>>, period: Duration) {
    loop {
        sleep(period).await;
        set_now.set(Utc::now());
    }
}

/// Whole minutes left before `expires_at`, rounded up; zero once expired.
pub fn minutes_remaining(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let seconds = (expires_at - now).num_seconds();
    if seconds <= 0 {
        0
    } else {
        (seconds + 59) / 60
    }
}

pub fn validity_hint(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    match minutes_remaining(expires_at, now) {
        0 => "The OTP has expired. Please resend.".to_string(),
        1 => "The OTP is valid for 1 more minute.".to_string(),
        n => format!("The OTP is valid for {} minutes.", n),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::{wait_until, with_local_runtime_async};

    #[test]
    fn clock_advances_while_running() {
        with_local_runtime_async(|| async {
            let runtime = create_runtime();
            let start = Utc::now() - chrono::Duration::minutes(5);
            let (now, set_now) = create_signal(start);
            TaskSlot::new().spawn(run_clock(set_now, Duration::from_millis(5)));
            assert!(wait_until(|| now.get_untracked() > start).await);
            runtime.dispose();
        });
    }

    #[test]
    fn clock_starts_at_current_time() {
        let before = Utc::now();
        let now = crate::test_support::ssr::with_runtime(|| {
            create_clock(Duration::from_secs(30)).get_untracked()
        });
        assert!(now >= before);
    }
}
