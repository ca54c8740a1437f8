//! A tour of everyday language features built around a few vehicles:
//! optionals, an enum with payloads, a value type, a shared reference type
//! and a trait both of them implement.

pub mod bicycle;
pub mod bindings;
pub mod color;
pub mod config;
pub mod drive;
pub mod error;
pub mod greeting;
pub mod motor_vehicle;
pub mod optional;
pub mod tour;

pub use bicycle::Bicycle;
pub use color::Color;
pub use config::TourConfig;
pub use drive::Drive;
pub use error::{Result, TourError};
pub use greeting::Greeting;
pub use motor_vehicle::{MotorVehicle, Motorcycle};
pub use tour::{Section, Tour};
