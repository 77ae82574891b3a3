//! Drawing-surface abstraction.
//!
//! The field draws through this trait so the simulation can be exercised
//! without a GPU. The wgpu renderer batches `fill_circle` calls into an
//! instance buffer; tests substitute a recording implementation.

use glam::Vec2;

/// A minimal 2D surface the field can render onto.
///
/// Coordinates are device pixels with the origin at the top-left corner.
pub trait Surface {
    /// Erase the previous frame.
    fn clear(&mut self);

    /// Draw a filled white circle at `center` with the given opacity.
    fn fill_circle(&mut self, center: Vec2, radius: f32, alpha: f32);
}
