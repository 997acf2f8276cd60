use std::time::Duration;

use gloo_timers::future::TimeoutFuture;

use crate::chant::Delay;

/// `setTimeout`-backed pause between chants.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerDelay;

impl Delay for TimerDelay {
    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}
