//! Accelerometer service and its scoped subscription.
//!
//! The screen never talks to a sensor directly. It holds an
//! [`AccelSubscription`], which subscribes on creation and unsubscribes when
//! dropped, so the sensor is released however the screen goes away.

use tiltgrid_common::config::{SAMPLE_RATE_HZ, SAMPLES_PER_UPDATE};
use tiltgrid_common::{MotionSample, TiltModel};
use tracing::{debug, info};

/// Host sensor service the screen subscribes to.
pub trait AccelService {
    /// Start delivering samples.
    fn subscribe(
        &mut self,
        rate_hz: u32,
        samples_per_update: u32,
    );

    /// Stop delivering samples.
    fn unsubscribe(&mut self);
}

// =============================================================================
// Scoped Subscription
// =============================================================================

/// Live subscription to an [`AccelService`]. Released on drop.
pub struct AccelSubscription<S: AccelService> {
    service: S,
}

impl<S: AccelService> AccelSubscription<S> {
    /// Subscribe at the app's fixed rate of one sample per update.
    pub fn acquire(mut service: S) -> Self {
        service.subscribe(SAMPLE_RATE_HZ, SAMPLES_PER_UPDATE);
        debug!(rate_hz = SAMPLE_RATE_HZ, samples_per_update = SAMPLES_PER_UPDATE, "accelerometer subscribed");
        Self { service }
    }

    #[inline]
    pub const fn service(&self) -> &S { &self.service }

    #[inline]
    pub fn service_mut(&mut self) -> &mut S { &mut self.service }
}

impl<S: AccelService> Drop for AccelSubscription<S> {
    fn drop(&mut self) {
        self.service.unsubscribe();
        debug!("accelerometer unsubscribed");
    }
}

// =============================================================================
// Simulated Sensor
// =============================================================================

/// Accelerometer backed by a [`TiltModel`], driven from the keyboard.
#[derive(Debug, Default)]
pub struct TiltSensor {
    model: TiltModel,
    subscribed: bool,
}

impl TiltSensor {
    pub const fn new() -> Self {
        Self {
            model: TiltModel::level(),
            subscribed: false,
        }
    }

    /// Next sample, or `None` while nobody is subscribed.
    pub fn read(&self) -> Option<MotionSample> { self.subscribed.then(|| self.model.sample()) }

    /// Change the simulated tilt by the given angles in degrees.
    pub fn tilt(
        &mut self,
        pitch_deg: f32,
        roll_deg: f32,
    ) {
        self.model.tilt(pitch_deg, roll_deg);
        debug!(pitch = self.model.pitch(), roll = self.model.roll(), "tilt changed");
    }

    /// Put the simulated watch back flat.
    pub fn level(&mut self) {
        self.model.reset();
        info!("tilt levelled");
    }

    #[inline]
    pub const fn model(&self) -> &TiltModel { &self.model }

    #[inline]
    pub const fn is_subscribed(&self) -> bool { self.subscribed }
}

impl AccelService for TiltSensor {
    fn subscribe(
        &mut self,
        _rate_hz: u32,
        _samples_per_update: u32,
    ) {
        self.subscribed = true;
    }

    fn unsubscribe(&mut self) { self.subscribed = false; }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Default)]
    struct Recorder {
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl AccelService for Recorder {
        fn subscribe(
            &mut self,
            rate_hz: u32,
            samples_per_update: u32,
        ) {
            self.calls.borrow_mut().push(format!("subscribe {rate_hz} {samples_per_update}"));
        }

        fn unsubscribe(&mut self) { self.calls.borrow_mut().push("unsubscribe".to_string()); }
    }

    #[test]
    fn test_subscription_is_scoped() {
        let recorder = Recorder::default();
        let calls = Rc::clone(&recorder.calls);

        let subscription = AccelSubscription::acquire(recorder);
        assert_eq!(*calls.borrow(), ["subscribe 25 1"]);

        drop(subscription);
        assert_eq!(*calls.borrow(), ["subscribe 25 1", "unsubscribe"]);
    }

    #[test]
    fn test_tilt_sensor_reads_only_while_subscribed() {
        let mut sensor = TiltSensor::new();
        assert!(sensor.read().is_none());

        sensor.subscribe(SAMPLE_RATE_HZ, SAMPLES_PER_UPDATE);
        assert!(sensor.read().is_some());

        sensor.unsubscribe();
        assert!(sensor.read().is_none());
    }

    #[test]
    fn test_tilt_sensor_follows_model() {
        let mut subscription = AccelSubscription::acquire(TiltSensor::new());
        subscription.service_mut().tilt(0.0, 90.0);
        let sample = subscription.service().read().unwrap();
        assert!(sample.x > 990, "full roll should read ~1000 mg, got {}", sample.x);

        subscription.service_mut().level();
        assert_eq!(*subscription.service().model(), TiltModel::level());
    }
}
