use std::{
    cell::RefCell,
    f64::consts::{PI, TAU},
    rc::Rc,
    time::Duration,
};

use serde::{Deserialize, Serialize};

use super::{TweenId, TweenScheduler};
use crate::{
    geom::Vec2,
    math::normalize_angle,
    style::Color,
};

/// Values that can be linearly interpolated. `lerp(dest, 0.0)` is `self`,
/// `lerp(dest, 1.0)` is `dest`.
pub trait Lerp: Clone {
    /// Interpolate towards `dest` by `t`.
    fn lerp(&self, dest: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(&self, dest: &Self, t: f64) -> Self {
        self + (dest - self) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(&self, dest: &Self, t: f64) -> Self {
        Self::lerp(self, *dest, t)
    }
}

impl Lerp for Color {
    fn lerp(&self, dest: &Self, t: f64) -> Self {
        Self::rgba(
            self.r.lerp(&dest.r, t),
            self.g.lerp(&dest.g, t),
            self.b.lerp(&dest.b, t),
            self.a.lerp(&dest.a, t),
        )
    }
}

/// An angle in radians. Interpolates along the shorter arc.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Angle(pub f64);

impl Angle {
    /// An angle from degrees.
    pub fn degrees(d: f64) -> Self {
        Self(d.to_radians())
    }

    /// The angle wrapped into `[0, 2π)`.
    pub fn normalized(self) -> Self {
        Self(normalize_angle(self.0))
    }
}

impl Lerp for Angle {
    fn lerp(&self, dest: &Self, t: f64) -> Self {
        let mut d = normalize_angle(dest.0 - self.0);
        if d > PI {
            d -= TAU;
        }
        Self(self.0 + d * t)
    }
}

/// A shared handle to a value that tweens write into.
///
/// Cloning the handle shares the value. The scheduler holds a clone for each
/// running tween; the owner reads the current value with [`Animated::get`].
#[derive(Debug, Default)]
pub struct Animated<T>(Rc<RefCell<T>>);

impl<T> Clone for Animated<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: Lerp> Animated<T> {
    /// Wrap a value.
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    /// A copy of the current value.
    pub fn get(&self) -> T {
        self.0.borrow().clone()
    }

    /// Replace the current value.
    pub fn set(&self, value: T) {
        *self.0.borrow_mut() = value;
    }

    /// Modify the current value in place.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.0.borrow_mut());
    }

    /// Start a tween of this value on `scheduler` with the default easing.
    pub fn animate_to(&self, scheduler: &mut TweenScheduler, dest: T, duration: Duration) -> TweenId
    where
        T: 'static,
    {
        scheduler.animate(self, dest, duration)
    }

    /// Do two handles share the same value?
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
