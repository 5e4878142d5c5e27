use std::collections::HashMap;

use style_face_buffer::{FaceBuffer, TextureId};
use style_fill::{Fill, FillError, ImageFill, ImageSource, RepeatMode, ResourceProvider, Tessellate};
use style_geometry::Rect;

/// In-memory provider that hands out sequential texture ids per path.
#[derive(Default)]
struct Atlas {
    loaded: HashMap<String, ImageSource>,
    requests: usize,
}

impl ResourceProvider for Atlas {
    fn require(&mut self, path: &str) -> Result<ImageSource, FillError> {
        self.requests += 1;
        if !path.ends_with(".png") {
            return Err(FillError::Resource {
                path: path.to_owned(),
                reason: "unsupported format".to_owned(),
            });
        }
        let next = u32::try_from(self.loaded.len()).unwrap_or(u32::MAX);
        Ok(*self.loaded.entry(path.to_owned()).or_insert(ImageSource {
            texture: TextureId(next),
            width: 64,
            height: 32,
        }))
    }
}

#[test]
fn load_resolves_through_the_provider() -> Result<(), FillError> {
    let mut atlas = Atlas::default();
    let first = ImageFill::load(&mut atlas, "ui/button.png", Some(Rect::new(32, 0, 32, 32)?))?;
    let again = ImageFill::load(&mut atlas, "ui/button.png", None)?;
    assert_eq!(first.source(), again.source());
    assert_eq!(atlas.requests, 2);
    assert_eq!(first.uv_rect(), ([0.5, 0.0], [1.0, 1.0]));
    Ok(())
}

#[test]
fn provider_failures_surface_as_errors() {
    let mut atlas = Atlas::default();
    assert!(matches!(
        ImageFill::load(&mut atlas, "ui/button.svg", None),
        Err(FillError::Resource { .. })
    ));
}

#[test]
fn vertical_repeat_only_tiles_rows() -> Result<(), FillError> {
    let mut atlas = Atlas::default();
    let mut fill = Fill::from(ImageFill::load(&mut atlas, "ui/stripe.png", None)?);
    fill.set_repeat_y(RepeatMode::Repeat)?;
    assert_eq!(fill.repeat_x(), RepeatMode::Stretch);

    let mut buffer = FaceBuffer::new();
    fill.geometry_for_rect(&Rect::new(0, 0, 200, 80)?, &mut buffer);
    // 80 / 32 = 2.5 rows, one stretched column
    assert_eq!(buffer.triangle_count(), 6);
    let last_v = buffer
        .batch(Some(TextureId(0)))
        .and_then(|batch| batch.texcoords().iter().map(|uv| uv[1]).reduce(f32::max));
    assert_eq!(last_v, Some(1.0));
    Ok(())
}
