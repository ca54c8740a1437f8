//! Reference-type vehicles.
//!
//! A [`MotorVehicle`] is a handle onto shared state: cloning it aliases the
//! same vehicle, and a change made through one handle is seen by all.
//! [`Motorcycle`] builds on it by composition and registers a release hook
//! that resets the wheel count once the last handle goes away.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use tracing::trace;

use crate::color::Color;
use crate::drive::Drive;

// =============================================================================
// Shared vehicle state
// =============================================================================

/// The mutable part of a vehicle, as seen by release hooks.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VehicleFields {
    pub color: Option<Color>,
    pub number_of_wheels: Option<u32>,
}

type ReleaseHook = Box<dyn FnOnce(&mut VehicleFields)>;

#[derive(Default)]
struct VehicleState {
    fields: VehicleFields,
    on_release: Vec<ReleaseHook>,
}

impl Drop for VehicleState {
    // Runs only when the last handle is released; hooks fire in registration order.
    fn drop(&mut self) {
        for hook in std::mem::take(&mut self.on_release) {
            hook(&mut self.fields);
        }
    }
}

#[derive(Clone)]
pub struct MotorVehicle {
    name: Rc<str>,
    state: Rc<RefCell<VehicleState>>,
}

impl MotorVehicle {
    pub fn new(name: impl Into<String>) -> Self {
        let name: String = name.into();
        Self {
            name: Rc::from(name),
            state: Rc::new(RefCell::new(VehicleState::default())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Option<Color> {
        self.state.borrow().fields.color.clone()
    }

    pub fn set_color(&self, color: Option<Color>) {
        self.state.borrow_mut().fields.color = color;
    }

    pub fn number_of_wheels(&self) -> Option<u32> {
        self.state.borrow().fields.number_of_wheels
    }

    pub fn set_number_of_wheels(&self, wheels: Option<u32>) {
        self.state.borrow_mut().fields.number_of_wheels = wheels;
    }

    /// True when both handles point at the same vehicle.
    pub fn shares_state_with(&self, other: &MotorVehicle) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    /// Registers a hook that runs when the last handle to this vehicle is dropped.
    pub fn on_release(&self, hook: impl FnOnce(&mut VehicleFields) + 'static) {
        self.state.borrow_mut().on_release.push(Box::new(hook));
    }
}

impl fmt::Debug for MotorVehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("MotorVehicle")
            .field("name", &self.name)
            .field("color", &state.fields.color)
            .field("number_of_wheels", &state.fields.number_of_wheels)
            .finish()
    }
}

// =============================================================================
// Motorcycle
// =============================================================================

/// Cloning a `Motorcycle` aliases it, like any other reference.
#[derive(Debug, Clone)]
pub struct Motorcycle {
    vehicle: MotorVehicle,
}

impl Motorcycle {
    pub const NAME: &'static str = "Motorcycle";
    pub const WHEELS: u32 = 2;

    pub fn new() -> Self {
        let vehicle = MotorVehicle::new(Self::NAME);
        vehicle.set_number_of_wheels(Some(Self::WHEELS));
        vehicle.on_release(|fields| {
            trace!("motorcycle released, resetting wheels");
            fields.number_of_wheels = Some(0);
        });
        Self { vehicle }
    }

    /// Another handle onto the same underlying vehicle.
    pub fn vehicle(&self) -> MotorVehicle {
        self.vehicle.clone()
    }
}

impl Default for Motorcycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Motorcycle {
    type Target = MotorVehicle;

    fn deref(&self) -> &Self::Target {
        &self.vehicle
    }
}

impl Drive for Motorcycle {
    fn drive_description(&self) -> String {
        format!(
            "Driving a {} with {} wheels",
            self.name(),
            self.number_of_wheels().unwrap_or(0)
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
