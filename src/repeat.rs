//! Long-press key repeat: a cancellable periodic task per held key.
//!
//! While a key stays pressed its action re-fires on a fixed interval, capped
//! at an overall maximum duration. Releasing the key cancels the task and
//! joins its thread, so no tick can land after `release` returns.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

/// Timing for long-press repeat.
#[derive(Debug, Clone, Copy)]
pub struct RepeatConfig {
    /// Delay between repeated ticks.
    pub interval: Duration,
    /// Safety cap on how long an unreleased key may keep repeating.
    pub max_duration: Duration,
}

impl Default for RepeatConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(60),
            max_duration: Duration::from_secs(60),
        }
    }
}

#[derive(Default)]
struct CancelSignal {
    cancelled: Mutex<bool>,
    condvar: Condvar,
}

impl CancelSignal {
    fn cancel(&self) {
        *self.cancelled.lock() = true;
        self.condvar.notify_one();
    }
}

struct RepeatTask {
    signal: Arc<CancelSignal>,
    handle: JoinHandle<()>,
}

impl RepeatTask {
    fn stop(self) {
        self.signal.cancel();
        let _ = self.handle.join();
    }
}

/// Per-key repeat supervisor. At most one task runs per held key.
pub struct KeyRepeater<K> {
    config: RepeatConfig,
    held: HashMap<K, RepeatTask>,
}

impl<K: Eq + Hash> KeyRepeater<K> {
    pub fn new(config: RepeatConfig) -> Self {
        Self {
            config,
            held: HashMap::new(),
        }
    }

    /// Start repeating `tick` for `key`: one tick immediately, then one per
    /// interval until release or the duration cap. Pressing a key that is
    /// already held does nothing.
    pub fn press<F>(&mut self, key: K, mut tick: F)
    where
        F: FnMut() + Send + 'static,
    {
        if self.held.contains_key(&key) {
            return;
        }
        let signal = Arc::new(CancelSignal::default());
        let task_signal = Arc::clone(&signal);
        let RepeatConfig {
            interval,
            max_duration,
        } = self.config;
        let handle = std::thread::spawn(move || {
            let start = Instant::now();
            let mut cancelled = task_signal.cancelled.lock();
            while !*cancelled && start.elapsed() < max_duration {
                tick();
                // Unlocks while waiting, so a release can land between ticks.
                let _ = task_signal.condvar.wait_for(&mut cancelled, interval);
            }
        });
        self.held.insert(key, RepeatTask { signal, handle });
    }

    /// Stop repeating `key`. Blocks until the task has fully stopped; no
    /// tick is delivered after this returns.
    pub fn release(&mut self, key: &K) {
        if let Some(task) = self.held.remove(key) {
            task.stop();
        }
    }

    /// Whether `key` is currently held (pressed and not yet released; a task
    /// that ran into the duration cap still counts until released).
    pub fn is_held(&self, key: &K) -> bool {
        self.held.contains_key(key)
    }

    /// Release every held key.
    pub fn release_all(&mut self) {
        for (_, task) in self.held.drain() {
            task.stop();
        }
    }
}

impl<K: Eq + Hash> Default for KeyRepeater<K> {
    fn default() -> Self {
        Self::new(RepeatConfig::default())
    }
}

impl<K> Drop for KeyRepeater<K> {
    fn drop(&mut self) {
        for (_, task) in self.held.drain() {
            task.stop();
        }
    }
}
