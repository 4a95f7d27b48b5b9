//! Face region handling and patch sampling
//!
//! A caller-supplied [`FaceBox`] is resolved into a validated [`Region`]
//! (falling back to a heuristic box when absent or invalid), and the
//! region is then sampled at three fixed skin locations.

mod face_box;
mod sampler;

pub use face_box::{resolve_face_box, FaceBox, Region};
pub use sampler::{
    extract_patches, patch_rects, PatchKind, PatchRect, PatchSample, PATCH_GRID, PATCH_MAX_SIDE,
};
