//! Arcline renders a looping, tap-stepped animation of a rotating
//! arc-and-line figure over a fixed color palette.
//!
//! One node of the palette chain is active at a time. Each tap triggers one
//! animation burst on the active node; when the burst settles, the chain
//! hands off to the next node, reversing direction at either end of the
//! palette. Frames rasterize on the CPU into a [`vello_cpu::Pixmap`].
//!
//! - Build a [`Config`] (or take [`Config::default`])
//! - Create a [`Stage`] at fixed canvas dimensions
//! - Call [`Stage::tap`] and [`Stage::tick`], or drive a whole burst with
//!   [`Stage::run_burst`]
#![forbid(unsafe_code)]

mod foundation;
mod node;

pub mod animator;
pub mod chain;
pub mod config;
pub mod draw;
pub mod renderer;
pub mod scale;
pub mod stage;
pub mod state;

pub use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rgba8, Vec2};
pub use crate::foundation::error::{ArclineError, ArclineResult};

pub use crate::animator::{Animator, ManualTimer, Timer};
pub use crate::chain::{Chain, Travel};
pub use crate::config::Config;
pub use crate::renderer::Renderer;
pub use crate::stage::Stage;
pub use crate::state::{Direction, NodeState, Step};
