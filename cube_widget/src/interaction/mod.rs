pub(crate) mod pointer;
pub(crate) mod snap;
pub(crate) mod spin;

pub use pointer::{interaction_plugin, PointerPhase, ReleaseAction};
pub use snap::{snap_plugin, SnapAnimation, SNAP_STEPS};
pub use spin::{spin_plugin, AngularVelocity, SpinMode, SpinState};
