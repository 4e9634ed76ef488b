// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Viewer math compares against exact axis constants and reset defaults
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::use_self)]

//! Orientation and camera-control core for an interactive 3D surface-model
//! viewer.
//!
//! Surfview owns *how the camera and object are oriented in space* each
//! frame: it accumulates incremental mouse-driven rotations into a stable,
//! gimbal-free quaternion orientation, converts pixel deltas into pan/zoom
//! offsets and rotation angles, and exposes the view and projection
//! parameters a renderer consumes once per frame.
//!
//! What is drawn, and with what backend, is not decided here. Geometry
//! loading, rasterization, texturing, and window/context creation are
//! external collaborators reached through three traits:
//!
//! - [`model::Model`] — the renderable geometry provider
//! - [`display::DisplaySurface`] — the render/present surface
//! - [`viewer::EventSource`] — the discrete input-event source
//!
//! # Key entry points
//!
//! - [`viewer::Viewer`] - the per-frame control loop
//! - [`camera::Camera`] - view/projection state and mouse-delta mapping
//! - [`orientation::OrientationController`] - quaternion orientation
//!   accumulation
//! - [`options::Options`] - runtime configuration (camera, display,
//!   keybindings)
//!
//! # Architecture
//!
//! One loop iteration is fully synchronous: drain pending input events,
//! dispatch each as a [`command::ViewerCommand`], resolve the accumulated
//! orientation into a single axis-angle pair, then hand the frame to the
//! display surface. The present call is the only point that may block.

pub mod camera;
pub mod command;
pub mod display;
pub mod input;
pub mod math;
pub mod model;
pub mod options;
pub mod orientation;
pub mod viewer;

mod error;

pub use camera::{Camera, Projection, ViewParams};
pub use command::ViewerCommand;
pub use display::{DisplaySurface, FrameParams};
pub use error::ViewerError;
pub use input::{ButtonState, InputEvent, InputProcessor, Modifiers};
pub use math::{Quaternion, Vector3};
pub use model::Model;
pub use orientation::OrientationController;
pub use viewer::{EventSource, Viewer};
