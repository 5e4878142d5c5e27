//! Per-widget triangle accumulator grouped by texture.
//!
//! A `FaceBuffer` collects the tessellated 2D geometry of one render pass as
//! three parallel streams (positions, colours, texture coordinates) per
//! texture. Untextured geometry lives under the `None` key. Insertion order is
//! preserved because it carries the triangle winding.

#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use log::trace;

/// Opaque handle of a texture owned by the renderer backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextureId(pub u32);

/// Position in pixels.
pub type Point = [f32; 2];
/// Straight (non-premultiplied) RGBA.
pub type Rgba = [f32; 4];
/// Texture coordinate in `[0, 1]`.
pub type TexCoord = [f32; 2];

/// Vertex colour used when the caller supplies none.
pub const OPAQUE_WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];
/// Texture coordinate used when the caller supplies none.
pub const NO_TEXCOORD: TexCoord = [0.0, 0.0];

/// Interleaved vertex layout handed to the GPU.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub colour: [f32; 4],
    pub texcoord: [f32; 2],
}

/// Corners of an axis-aligned quad in the order the quad split expects:
/// top-left, bottom-left, bottom-right, top-right.
#[inline]
pub const fn rect_corners(left: f32, top: f32, right: f32, bottom: f32) -> [Point; 4] {
    [[left, top], [left, bottom], [right, bottom], [right, top]]
}

/// Triangle list for a single texture.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FaceBatch {
    vertices: Vec<Point>,
    colours: Vec<Rgba>,
    texcoords: Vec<TexCoord>,
}

impl FaceBatch {
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn colours(&self) -> &[Rgba] {
        &self.colours
    }

    #[inline]
    pub fn texcoords(&self) -> &[TexCoord] {
        &self.texcoords
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Interleave the three streams into GPU vertices.
    pub fn packed(&self) -> Vec<Vertex> {
        self.vertices
            .iter()
            .zip(&self.colours)
            .zip(&self.texcoords)
            .map(|((position, colour), texcoord)| Vertex {
                position: *position,
                colour: *colour,
                texcoord: *texcoord,
            })
            .collect()
    }

    /// Raw bytes of [`FaceBatch::packed`], ready for a vertex buffer upload.
    pub fn packed_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.packed()).to_vec()
    }

    fn push(&mut self, vertices: [Point; 3], colours: [Rgba; 3], texcoords: [TexCoord; 3]) {
        self.vertices.extend(vertices);
        self.colours.extend(colours);
        self.texcoords.extend(texcoords);
    }
}

/// Geometry of one render submission, keyed by texture.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FaceBuffer {
    batches: BTreeMap<Option<TextureId>, FaceBatch>,
}

impl FaceBuffer {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one triangle.
    ///
    /// Colours default to opaque white and texture coordinates to `(0, 0)`.
    /// The triangle lands in the batch of `texture`'s id, or the untextured
    /// batch when `texture` is `None`.
    pub fn add_face(
        &mut self,
        vertices: [Point; 3],
        colours: Option<[Rgba; 3]>,
        texture: Option<(TextureId, [TexCoord; 3])>,
    ) {
        let (key, texcoords) = match texture {
            Some((id, coords)) => (Some(id), coords),
            None => (None, [NO_TEXCOORD; 3]),
        };
        self.batches.entry(key).or_default().push(
            vertices,
            colours.unwrap_or([OPAQUE_WHITE; 3]),
            texcoords,
        );
    }

    /// Append a quad `v0 v1 v2 v3` as the triangles `(v0, v1, v3)` and
    /// `(v1, v3, v2)`. Texture sampling downstream depends on this diagonal.
    pub fn add_quad(
        &mut self,
        vertices: [Point; 4],
        colours: Option<[Rgba; 4]>,
        texture: Option<(TextureId, [TexCoord; 4])>,
    ) {
        let [v0, v1, v2, v3] = vertices;
        let first_colours = colours.map(|[c0, c1, _, c3]| [c0, c1, c3]);
        let second_colours = colours.map(|[_, c1, c2, c3]| [c1, c3, c2]);
        let first_texture = texture.map(|(id, [t0, t1, _, t3])| (id, [t0, t1, t3]));
        let second_texture = texture.map(|(id, [_, t1, t2, t3])| (id, [t1, t3, t2]));
        self.add_face([v0, v1, v3], first_colours, first_texture);
        self.add_face([v1, v3, v2], second_colours, second_texture);
    }

    /// Batch for `texture`, if any geometry was emitted for it.
    #[inline]
    pub fn batch(&self, texture: Option<TextureId>) -> Option<&FaceBatch> {
        self.batches.get(&texture)
    }

    /// All batches in texture order, untextured first.
    pub fn batches(&self) -> impl Iterator<Item = (Option<TextureId>, &FaceBatch)> {
        self.batches.iter().map(|(key, batch)| (*key, batch))
    }

    pub fn triangle_count(&self) -> usize {
        self.batches.values().map(FaceBatch::triangle_count).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.batches.values().all(FaceBatch::is_empty)
    }

    /// Append every batch of `other` after this buffer's geometry.
    pub fn extend_from(&mut self, other: &Self) {
        for (key, batch) in &other.batches {
            let target = self.batches.entry(*key).or_default();
            target.vertices.extend_from_slice(&batch.vertices);
            target.colours.extend_from_slice(&batch.colours);
            target.texcoords.extend_from_slice(&batch.texcoords);
        }
        trace!(target: "style_face_buffer", "merged {} triangles", other.triangle_count());
    }

    pub fn clear(&mut self) {
        self.batches.clear();
    }
}
