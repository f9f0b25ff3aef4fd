//! Debouncing of rapidly changing input

use std::time::{Duration, Instant};

/// Holds back a value until it has stopped changing for `delay`
///
/// The clock is passed in explicitly: callers feed `now` from whatever
/// timer drives their event loop, and tests can step time by hand.
///
/// # Examples
///
/// ```
/// use gridline_select::Debouncer;
/// use std::time::{Duration, Instant};
///
/// let start = Instant::now();
/// let mut debouncer = Debouncer::new(Duration::from_millis(300));
/// debouncer.push("ca", start);
/// debouncer.push("cat", start + Duration::from_millis(100));
///
/// assert_eq!(debouncer.poll(start + Duration::from_millis(350)), None);
/// assert_eq!(debouncer.poll(start + Duration::from_millis(400)), Some("cat"));
/// ```
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
	delay: Duration,
	pending: Option<(T, Instant)>,
	last_fired: Option<T>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
	/// Creates a debouncer with the given quiet period
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			pending: None,
			last_fired: None,
		}
	}

	/// Quiet period
	pub fn delay(&self) -> Duration {
		self.delay
	}

	/// Records a new value, restarting the quiet period
	pub fn push(&mut self, value: T, now: Instant) {
		self.pending = Some((value, now));
	}

	/// When the pending value becomes ready, if there is one
	pub fn deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|(_, at)| *at + self.delay)
	}

	/// True while a value is waiting
	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// Returns the pending value once its quiet period has passed
	///
	/// A value equal to the one fired last is swallowed, so typing a
	/// character and deleting it again does not search twice.
	pub fn poll(&mut self, now: Instant) -> Option<T> {
		let deadline = self.deadline()?;
		if now < deadline {
			return None;
		}
		let (value, _) = self.pending.take()?;
		self.fire(value)
	}

	/// Fires the pending value immediately
	pub fn flush(&mut self) -> Option<T> {
		let (value, _) = self.pending.take()?;
		self.fire(value)
	}

	/// Drops the pending value
	pub fn cancel(&mut self) {
		self.pending = None;
	}

	/// Forgets the last fired value so an equal value fires again
	pub fn forget(&mut self) {
		self.last_fired = None;
	}

	fn fire(&mut self, value: T) -> Option<T> {
		if self.last_fired.as_ref() == Some(&value) {
			return None;
		}
		self.last_fired = Some(value.clone());
		Some(value)
	}
}
