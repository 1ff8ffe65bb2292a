//! # Rate Limiting
//!
//! A sliding-window limiter: at most `max_calls` calls are admitted within any
//! window of length `period`. [`RateLimited`] wraps a callable so each
//! invocation first waits for a free slot.
//!
//! The call history sits behind a `Mutex`, so one limiter (or wrapped
//! callable) can be shared across threads.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::utils::error::{Error, Result};

#[derive(Debug)]
pub struct RateLimiter {
    max_calls: usize,
    period: Duration,
    calls: Mutex<VecDeque<Instant>>,
}

impl RateLimiter {
    /// # Errors
    ///
    /// Returns an `Error` if `max_calls` is zero or `period` is zero.
    pub fn new(max_calls: usize, period: Duration) -> Result<Self> {
        if max_calls == 0 {
            return Err(Error::new("max_calls must be a positive integer"));
        }
        if period.is_zero() {
            return Err(Error::new("period must be greater than zero"));
        }

        Ok(Self {
            max_calls,
            period,
            calls: Mutex::new(VecDeque::new()),
        })
    }

    pub fn max_calls(&self) -> usize {
        self.max_calls
    }

    /// Takes a slot if one is free. Never blocks.
    pub fn try_acquire(&self) -> Result<bool> {
        let now = Instant::now();
        let mut calls = self.calls.lock()?;

        self.expire(&mut calls, now);

        if calls.len() < self.max_calls {
            calls.push_back(now);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Takes a slot, sleeping until one frees up.
    pub fn acquire(&self) -> Result<()> {
        loop {
            let wait = {
                let now = Instant::now();
                let mut calls = self.calls.lock()?;

                self.expire(&mut calls, now);

                if calls.len() < self.max_calls {
                    calls.push_back(now);
                    return Ok(());
                }

                self.wait_time(&calls, now)
            };

            debug!("rate limit reached, sleeping {:?}", wait);
            std::thread::sleep(wait);
        }
    }

    /// How long until the next slot opens; zero if one is free now.
    pub fn time_until_ready(&self) -> Result<Duration> {
        let now = Instant::now();
        let mut calls = self.calls.lock()?;

        self.expire(&mut calls, now);

        if calls.len() < self.max_calls {
            Ok(Duration::ZERO)
        } else {
            Ok(self.wait_time(&calls, now))
        }
    }

    fn expire(&self, calls: &mut VecDeque<Instant>, now: Instant) {
        while let Some(&oldest) = calls.front() {
            if now.duration_since(oldest) >= self.period {
                calls.pop_front();
            } else {
                break;
            }
        }
    }

    // A period too long to add to an `Instant` waits the full period
    fn wait_time(&self, calls: &VecDeque<Instant>, now: Instant) -> Duration {
        calls
            .front()
            .map(|&oldest| {
                oldest
                    .checked_add(self.period)
                    .map_or(self.period, |ready| ready.saturating_duration_since(now))
            })
            .unwrap_or(Duration::ZERO)
    }
}

/// A callable that is throttled by its own [`RateLimiter`].
#[derive(Debug)]
pub struct RateLimited<F> {
    func: F,
    limiter: RateLimiter,
}

/// Wraps `func` so that it runs at most `max_calls` times per `period`.
pub fn rate_limited<F>(func: F, max_calls: usize, period: Duration) -> Result<RateLimited<F>> {
    Ok(RateLimited {
        func,
        limiter: RateLimiter::new(max_calls, period)?,
    })
}

impl<F> RateLimited<F> {
    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    /// Waits for a slot, then invokes the wrapped callable.
    pub fn call<R>(&self) -> Result<R>
    where
        F: Fn() -> R,
    {
        self.limiter.acquire()?;
        Ok((self.func)())
    }

    /// Like [`call`](Self::call) for callables taking one argument.
    pub fn call_with<A, R>(&self, arg: A) -> Result<R>
    where
        F: Fn(A) -> R,
    {
        self.limiter.acquire()?;
        Ok((self.func)(arg))
    }

    /// Invokes the callable only if a slot is free right now.
    pub fn try_call<R>(&self) -> Result<Option<R>>
    where
        F: Fn() -> R,
    {
        if self.limiter.try_acquire()? {
            Ok(Some((self.func)()))
        } else {
            Ok(None)
        }
    }
}
