//! Rule evaluation.
//!
//! Pure functions over the board; nothing here mutates state except
//! [`interaction::resolve_interaction`], which actions call after validation.
//!
//! - `geometry`: movement patterns and screen counting per base kind
//! - `composition`: which pieces may join which stacks
//! - `interaction`: weight/rank eligibility and the two resolution modes
//! - `chain`: whether a landed stack can keep interacting

pub mod chain;
pub mod composition;
pub mod geometry;
pub mod interaction;

pub use chain::{chain_targets, has_chain_options, is_chain_target};
pub use composition::{CompositionError, can_stack_on, check_height};
pub use geometry::{GeometryError, check_path};
pub use interaction::{
    CaptureError, Engagement, Target, can_capture, check_stackable, engage, resolve_interaction,
};
