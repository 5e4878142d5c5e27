//! Image fills backed by a texture resource.

use style_face_buffer::{FaceBuffer, TexCoord, TextureId, rect_corners};
use style_geometry::Rect;

use crate::{FillError, RepeatMode, Tessellate};

/// A loaded image as seen by the style engine: the renderer's texture handle
/// plus the pixel dimensions of the whole resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageSource {
    pub texture: TextureId,
    pub width: u32,
    pub height: u32,
}

/// Supplies image resources by path. Implementations cache by identity so
/// repeated requests for one path return the same texture.
pub trait ResourceProvider {
    /// # Errors
    /// Returns `FillError::Resource` when the image cannot be provided.
    fn require(&mut self, path: &str) -> Result<ImageSource, FillError>;

    /// Whether a missing image should paint nothing instead of failing.
    fn missing_is_transparent(&self) -> bool {
        false
    }
}

/// Region of an image painted into a target rectangle, stretched or tiled
/// independently along each axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageFill {
    source: ImageSource,
    sub_rect: Rect,
    repeat_x: RepeatMode,
    repeat_y: RepeatMode,
    uv_min: TexCoord,
    uv_max: TexCoord,
}

/// One span along an axis together with the texture range painted into it.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Segment {
    from: f32,
    to: f32,
    uv_from: f32,
    uv_to: f32,
}

impl ImageFill {
    /// Paint `sub_rect` of `source`, or the whole image when `None`.
    ///
    /// # Errors
    /// Returns `FillError::EmptySource` for a zero-sized region and
    /// `FillError::SourceOutOfBounds` when the region's texture coordinates
    /// would leave `[0, 1]`.
    pub fn new(source: ImageSource, sub_rect: Option<Rect>) -> Result<Self, FillError> {
        let full = Rect::new(
            0,
            0,
            i32::try_from(source.width).unwrap_or(i32::MAX),
            i32::try_from(source.height).unwrap_or(i32::MAX),
        )?;
        let sub_rect = sub_rect.unwrap_or(full);
        if sub_rect.is_empty() {
            return Err(FillError::EmptySource);
        }
        if !full.contains_rect(&sub_rect) {
            return Err(FillError::SourceOutOfBounds {
                rect: sub_rect,
                width: source.width,
                height: source.height,
            });
        }
        let (width, height) = (source.width as f32, source.height as f32);
        Ok(Self {
            source,
            sub_rect,
            repeat_x: RepeatMode::Stretch,
            repeat_y: RepeatMode::Stretch,
            uv_min: [sub_rect.left() as f32 / width, sub_rect.top() as f32 / height],
            uv_max: [sub_rect.right() as f32 / width, sub_rect.bottom() as f32 / height],
        })
    }

    /// Load `path` through `resources` and paint `sub_rect` of it.
    ///
    /// # Errors
    /// Propagates resource and range errors.
    pub fn load(
        resources: &mut dyn ResourceProvider,
        path: &str,
        sub_rect: Option<Rect>,
    ) -> Result<Self, FillError> {
        Self::new(resources.require(path)?, sub_rect)
    }

    #[inline]
    pub const fn source(&self) -> ImageSource {
        self.source
    }

    #[inline]
    pub const fn sub_rect(&self) -> Rect {
        self.sub_rect
    }

    /// Texture-space rectangle as `(min, max)` corners.
    #[inline]
    pub const fn uv_rect(&self) -> (TexCoord, TexCoord) {
        (self.uv_min, self.uv_max)
    }

    #[inline]
    pub const fn repeat_x(&self) -> RepeatMode {
        self.repeat_x
    }

    #[inline]
    pub const fn repeat_y(&self) -> RepeatMode {
        self.repeat_y
    }

    #[inline]
    pub fn set_repeat_x(&mut self, mode: RepeatMode) {
        self.repeat_x = mode;
    }

    #[inline]
    pub fn set_repeat_y(&mut self, mode: RepeatMode) {
        self.repeat_y = mode;
    }
}

/// Spans along one axis. Stretch maps the whole texture range onto the
/// target; Repeat lays full tiles at native size and ends with a partial tile
/// whose far coordinate is `uv_from + frac(splits) * (uv_to - uv_from)`.
fn axis_segments(
    start: f32,
    extent: f32,
    tile: f32,
    uv_from: f32,
    uv_to: f32,
    mode: RepeatMode,
) -> Vec<Segment> {
    match mode {
        RepeatMode::Stretch => vec![Segment {
            from: start,
            to: start + extent,
            uv_from,
            uv_to,
        }],
        RepeatMode::Repeat => {
            let splits = extent / tile;
            let whole = splits.floor();
            let fraction = splits - whole;
            let full_tiles = whole as usize;
            let mut segments = Vec::with_capacity(full_tiles + 1);
            for index in 0..full_tiles {
                let from = start + index as f32 * tile;
                segments.push(Segment {
                    from,
                    to: from + tile,
                    uv_from,
                    uv_to,
                });
            }
            if fraction > 0.0 {
                segments.push(Segment {
                    from: start + whole * tile,
                    to: start + extent,
                    uv_from,
                    uv_to: uv_from + fraction * (uv_to - uv_from),
                });
            }
            segments
        }
    }
}

impl Tessellate for ImageFill {
    fn geometry_for_rect(&self, rect: &Rect, buffer: &mut FaceBuffer) {
        if rect.is_empty() {
            return;
        }
        let columns = axis_segments(
            rect.left() as f32,
            rect.width() as f32,
            self.sub_rect.width() as f32,
            self.uv_min[0],
            self.uv_max[0],
            self.repeat_x,
        );
        let rows = axis_segments(
            rect.top() as f32,
            rect.height() as f32,
            self.sub_rect.height() as f32,
            self.uv_min[1],
            self.uv_max[1],
            self.repeat_y,
        );
        for row in &rows {
            for column in &columns {
                let corners = rect_corners(column.from, row.from, column.to, row.to);
                let texcoords = [
                    [column.uv_from, row.uv_from],
                    [column.uv_from, row.uv_to],
                    [column.uv_to, row.uv_to],
                    [column.uv_to, row.uv_from],
                ];
                buffer.add_quad(corners, None, Some((self.source.texture, texcoords)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATLAS: ImageSource = ImageSource {
        texture: TextureId(7),
        width: 256,
        height: 256,
    };

    fn tile() -> Result<ImageFill, FillError> {
        ImageFill::new(ATLAS, Some(Rect::new(0, 0, 16, 16)?))
    }

    #[test]
    fn source_rect_must_fit_the_resource() -> Result<(), FillError> {
        assert!(matches!(
            ImageFill::new(ATLAS, Some(Rect::new(250, 0, 16, 16)?)),
            Err(FillError::SourceOutOfBounds { .. })
        ));
        assert_eq!(
            ImageFill::new(ATLAS, Some(Rect::new(3, 3, 0, 4)?)),
            Err(FillError::EmptySource)
        );
        assert_eq!(ImageFill::new(ATLAS, None)?.uv_rect(), ([0.0, 0.0], [1.0, 1.0]));
        Ok(())
    }

    #[test]
    fn stretch_maps_the_source_uv_rect_onto_the_target() -> Result<(), FillError> {
        let mut buffer = FaceBuffer::new();
        tile()?.geometry_for_rect(&Rect::new(0, 0, 32, 32)?, &mut buffer);
        let batch = buffer.batch(Some(TextureId(7)));
        assert_eq!(batch.map(style_face_buffer::FaceBatch::triangle_count), Some(2));
        let edge = 16.0 / 256.0;
        let (top_left, bottom_left, bottom_right, top_right) =
            ([0.0, 0.0], [0.0, edge], [edge, edge], [edge, 0.0]);
        assert_eq!(
            batch.map(style_face_buffer::FaceBatch::texcoords),
            Some(&[top_left, bottom_left, top_right, bottom_left, top_right, bottom_right][..])
        );
        Ok(())
    }

    #[test]
    fn repeat_adds_a_fractional_tile() {
        let segments = axis_segments(0.0, 40.0, 16.0, 0.0, 0.0625, RepeatMode::Repeat);
        assert_eq!(segments.len(), 3);
        assert_eq!(
            segments[2],
            Segment {
                from: 32.0,
                to: 40.0,
                uv_from: 0.0,
                uv_to: 0.5 * 0.0625,
            }
        );
    }

    #[test]
    fn exact_multiples_have_no_partial_tile() {
        assert_eq!(
            axis_segments(10.0, 32.0, 16.0, 0.25, 0.5, RepeatMode::Repeat).len(),
            2
        );
    }

    #[test]
    fn repeating_both_axes_emits_a_grid() -> Result<(), FillError> {
        let mut fill = tile()?;
        fill.set_repeat_x(RepeatMode::Repeat);
        fill.set_repeat_y(RepeatMode::Repeat);
        let mut buffer = FaceBuffer::new();
        fill.geometry_for_rect(&Rect::new(0, 0, 40, 20)?, &mut buffer);
        // 3 columns x 2 rows, two triangles each
        assert_eq!(buffer.triangle_count(), 12);
        Ok(())
    }

    /// Texcoords and vertices of the last quad emitted into the atlas batch.
    fn last_quad(buffer: &FaceBuffer) -> (Vec<TexCoord>, Vec<[f32; 2]>) {
        let batch = buffer.batch(Some(TextureId(7)));
        let tail = |items: &[[f32; 2]]| items[items.len().saturating_sub(6)..].to_vec();
        (
            batch.map(|batch| tail(batch.texcoords())).unwrap_or_default(),
            batch.map(|batch| tail(batch.vertices())).unwrap_or_default(),
        )
    }

    #[test]
    fn partial_tiles_clip_their_texcoords() -> Result<(), FillError> {
        let mut fill = tile()?;
        fill.set_repeat_x(RepeatMode::Repeat);
        fill.set_repeat_y(RepeatMode::Repeat);
        let mut buffer = FaceBuffer::new();
        fill.geometry_for_rect(&Rect::new(0, 0, 40, 20)?, &mut buffer);

        let (texcoords, vertices) = last_quad(&buffer);
        let (column, row) = (0.5 * 16.0 / 256.0, 0.25 * 16.0 / 256.0);
        let (top_left, bottom_left, bottom_right, top_right) =
            ([0.0, 0.0], [0.0, row], [column, row], [column, 0.0]);
        assert_eq!(
            texcoords,
            [top_left, bottom_left, top_right, bottom_left, top_right, bottom_right]
        );
        assert_eq!(vertices[0], [32.0, 16.0]);
        assert_eq!(vertices[5], [40.0, 20.0]);
        Ok(())
    }

    #[test]
    fn repeat_x_with_stretch_y_tiles_one_row() -> Result<(), FillError> {
        let mut fill = tile()?;
        fill.set_repeat_x(RepeatMode::Repeat);
        let mut buffer = FaceBuffer::new();
        fill.geometry_for_rect(&Rect::new(0, 0, 40, 20)?, &mut buffer);
        assert_eq!(buffer.triangle_count(), 6);

        let (texcoords, vertices) = last_quad(&buffer);
        let (column, full) = (0.5 * 16.0 / 256.0, 16.0 / 256.0);
        let (top_left, bottom_left, bottom_right, top_right) =
            ([0.0, 0.0], [0.0, full], [column, full], [column, 0.0]);
        assert_eq!(
            texcoords,
            [top_left, bottom_left, top_right, bottom_left, top_right, bottom_right]
        );
        // the single row spans the whole height
        assert_eq!(vertices[0], [32.0, 0.0]);
        assert_eq!(vertices[5], [40.0, 20.0]);
        Ok(())
    }
}
