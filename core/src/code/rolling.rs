use crate::code::clock::ClockSource;
use crate::code::digest::make_code;
use crate::config::CodeConfig;
use crate::error::{CoreError, CoreResult};

/// Start of the window of `lifetime_secs` seconds that contains `now_secs`.
pub fn rolling_window(now_secs: u64, lifetime_secs: i64) -> CoreResult<u64> {
    let lifetime = checked_lifetime(lifetime_secs)?;
    Ok(now_secs - (now_secs % lifetime))
}

/// Code for `seed` that stays the same for every instant in the current window.
pub fn make_rolling_code(
    seed: &str,
    lifetime_secs: i64,
    clock: &ClockSource,
) -> CoreResult<String> {
    let window = rolling_window(clock.epoch_seconds(), lifetime_secs)?;
    Ok(code_for_window(seed, window))
}

fn code_for_window(seed: &str, window: u64) -> String {
    tracing::trace!(window, "deriving rolling code");
    make_code(&format!("{seed}{window}"))
}

fn checked_lifetime(lifetime_secs: i64) -> CoreResult<u64> {
    match u64::try_from(lifetime_secs) {
        Ok(l) if l > 0 => Ok(l),
        _ => Err(CoreError::InvalidArgument(format!(
            "lifetime_secs must be positive, got {}",
            lifetime_secs
        ))),
    }
}

#[derive(Debug, Clone)]
pub struct RollingCodeGenerator {
    clock: ClockSource,
    lifetime_secs: u64,
}

impl RollingCodeGenerator {
    pub fn new(lifetime_secs: i64, clock: ClockSource) -> CoreResult<Self> {
        Ok(Self {
            clock,
            lifetime_secs: checked_lifetime(lifetime_secs)?,
        })
    }

    pub fn from_config(config: &CodeConfig, clock: ClockSource) -> CoreResult<Self> {
        Self::new(config.lifetime_secs, clock)
    }

    pub fn lifetime_secs(&self) -> u64 {
        self.lifetime_secs
    }

    pub fn window_start(&self) -> u64 {
        self.window_at(self.clock.epoch_seconds())
    }

    /// Seconds left before the current code rotates. Always in `1..=lifetime`.
    pub fn expires_in(&self) -> u64 {
        self.lifetime_secs - (self.clock.epoch_seconds() % self.lifetime_secs)
    }

    pub fn code(&self, seed: &str) -> String {
        self.code_at(seed, self.clock.epoch_seconds())
    }

    pub fn code_at(&self, seed: &str, epoch_secs: u64) -> String {
        code_for_window(seed, self.window_at(epoch_secs))
    }

    /// True when `candidate` is the code for `seed` in the current window.
    /// Case-insensitive, since codes are often typed by hand.
    pub fn verify(&self, seed: &str, candidate: &str) -> bool {
        let ok = self.code(seed).eq_ignore_ascii_case(candidate.trim());
        if !ok {
            tracing::debug!("rolling code mismatch");
        }
        ok
    }

    fn window_at(&self, epoch_secs: u64) -> u64 {
        epoch_secs - (epoch_secs % self.lifetime_secs)
    }
}
