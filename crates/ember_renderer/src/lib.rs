//! Ember renderer - CPU Path Tracing
//!
//! A single-threaded Monte Carlo path tracer for small analytic scenes made
//! of spheres and planes. The entry point is [`render_pixel`]; allocating
//! and encoding the image is left to the caller.
//!
//! All randomness comes from the `rand::RngCore` handed in, so seeding
//! that generator makes a render reproducible.

mod camera;
pub mod description;
mod hittable;
mod plane;
mod primitive;
mod renderer;
pub mod sampling;
mod scene;
mod sphere;
pub mod tracer;

pub use camera::Camera;
pub use description::{SceneDescription, SceneError, SceneResult};
pub use hittable::{Hit, Hittable};
pub use plane::{Plane, PLANE_EPSILON};
pub use primitive::Primitive;
pub use renderer::{render_pixel, shade, RenderConfig, ShadingMode, COVERAGE_COLOR};
pub use scene::Scene;
pub use sphere::Sphere;
pub use tracer::{background, trace};

/// Re-export Vec3 and common math types from ember_math
pub use ember_math::{Interval, Ray, Vec3};

/// Linear RGB color, components nominally in [0, 1]
pub type Color = Vec3;
