use style_border::{Border, BorderEdge, BorderError, BorderOutline, Corner, PathCommand};
use style_face_buffer::FaceBuffer;
use style_fill::Colour;
use style_geometry::{Edges, Rect};

#[test]
fn a_single_edge_paints_a_single_strip() -> Result<(), Box<dyn std::error::Error>> {
    let mut border = Border::default();
    *border.top_mut() = BorderEdge::new(3, Colour::BLACK)?;

    let mut buffer = FaceBuffer::new();
    let widths = border.geometry_for_rect(&Rect::new(0, 0, 20, 10)?, &mut buffer);
    assert_eq!(widths, Edges::new(0, 3, 0, 0)?);
    assert_eq!(buffer.triangle_count(), 2);
    Ok(())
}

#[test]
fn rounded_uniform_borders_outline_with_arcs() -> Result<(), Box<dyn std::error::Error>> {
    let mut border = Border::uniform(BorderEdge::new(2, Colour::WHITE)?);
    border.set_radius(Corner::TopLeft, 4)?;

    let BorderOutline::Uniform(path) = border.outline(&Rect::new(0, 0, 30, 20)?) else {
        return Err("expected a single closed path".into());
    };
    let arcs = path
        .commands
        .iter()
        .filter(|command| matches!(command, PathCommand::Arc { .. }))
        .count();
    assert_eq!(arcs, 1);
    assert_eq!(path.commands.last(), Some(&PathCommand::Close));
    Ok(())
}

#[test]
fn mixed_edges_outline_per_visible_edge() -> Result<(), Box<dyn std::error::Error>> {
    let border = Border::new(
        BorderEdge::new(1, Colour::BLACK)?,
        BorderEdge::NONE,
        BorderEdge::new(2, Colour::BLACK)?,
        BorderEdge::NONE,
    );
    assert_eq!(border.outline(&Rect::new(0, 0, 10, 10)?).path_count(), 2);
    Ok(())
}

#[test]
fn radii_are_validated() -> Result<(), BorderError> {
    let mut border = Border::default();
    assert_eq!(
        border.set_radius(Corner::BottomLeft, -1),
        Err(BorderError::NegativeRadius {
            corner: Corner::BottomLeft,
            value: -1,
        })
    );
    border.set_radius(Corner::BottomLeft, 6)?;
    assert_eq!(border.radius(Corner::BottomLeft), 6);
    Ok(())
}
