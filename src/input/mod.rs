//! Touch input: virtual joystick, buttons, and the pointer dispatcher
//!
//! The dispatcher classifies each pointer once when it lands and routes
//! the rest of its gesture to that owner. The simulation never sees raw
//! pointers, only the per-tick [`crate::sim::TickInput`] snapshot.

pub mod button;
pub mod dispatcher;
pub mod joystick;

pub use button::TouchButton;
pub use dispatcher::InputDispatcher;
pub use joystick::VirtualJoystick;
