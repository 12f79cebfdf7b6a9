// src/core/mod.rs — Dashboard state and decision logic, free of any I/O surface.

pub mod clock;
pub mod controller;
pub mod fps;
pub mod recent;
pub mod session;
pub mod status;
pub mod upload;
pub mod view;

pub use controller::{Control, DashboardController};
pub use status::StatusKind;
pub use view::{ControlStates, ViewPort};
