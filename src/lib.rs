//! reptall renders N transformed copies of one source frame into an output buffer.
//!
//! Each frame runs a fixed pipeline:
//!
//! - extract a [`RepeaterState`] from the host's [`ParamSnapshot`]
//! - compute one [`CopyTransform`] per copy, optionally against a [`CameraSample`]
//! - sort the copies back-to-front by camera depth
//! - clear the output and composite every visible copy with bilinear sampling
//!
//! 8-bit, 16-bit and float pixels share one generic sampling/compositing path (see [`Channel`]).
#![forbid(unsafe_code)]

mod foundation;

pub mod params;
pub mod render;
pub mod scene;
pub mod session;
pub mod transform;

pub use crate::foundation::core::{FrameIndex, MAX_COPIES, Point, Vec2, Vec3};
pub use crate::foundation::error::{RepeaterError, RepeaterResult};

pub use crate::params::registry::{ParamId, ParamKind, ParamSpec, registry};
pub use crate::params::snapshot::ParamSnapshot;
pub use crate::params::strings::{StrId, about_text, string};
pub use crate::render::pixel::{Channel, Pixel, PixelDepth};
pub use crate::render::rasterize::{AbortPoll, NeverAbort, Progress};
pub use crate::render::surface::{OutputFrame, PixelImage, SourceFrame, Surface, SurfaceMut};
pub use crate::scene::camera::{CameraSample, CameraSource, NoCamera};
pub use crate::scene::state::RepeaterState;
pub use crate::session::render_frame::{FrameInputs, RenderOutcome, RenderStatus, render_frame};
pub use crate::transform::compute::{CopyTransform, WorldMatrix, compute_copy_transforms};
pub use crate::transform::depth::sort_copies_by_depth;
