use glam::Vec2;

/// Fill/stroke attributes shared by every shape
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: f32,
    /// 0.0 = transparent, 1.0 = opaque
    pub opacity: f32,
    /// Render through the blur glow filter
    pub glow: bool,
}

impl Paint {
    pub fn fill(color: impl Into<String>) -> Self {
        Self {
            fill: Some(color.into()),
            stroke: None,
            stroke_width: 0.0,
            opacity: 1.0,
            glow: false,
        }
    }

    pub fn stroke(color: impl Into<String>, width: f32) -> Self {
        Self {
            fill: None,
            stroke: Some(color.into()),
            stroke_width: width,
            opacity: 1.0,
            glow: false,
        }
    }

    pub fn with_stroke(mut self, color: impl Into<String>, width: f32) -> Self {
        self.stroke = Some(color.into());
        self.stroke_width = width;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn with_glow(mut self, glow: bool) -> Self {
        self.glow = glow;
        self
    }
}

/// Vector drawing operations emitted once per frame
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Closed filled/stroked polygon
    Polygon { points: Vec<Vec2>, paint: Paint },

    /// Open stroked path with round caps and joins
    Polyline { points: Vec<Vec2>, paint: Paint },

    /// Circle at `center`; `scale` multiplies the radius around the center
    Circle { center: Vec2, radius: f32, scale: f32, paint: Paint },

    /// Bold monospace text centered on `position`
    Text { position: Vec2, text: String, font_size: f32, color: String },

    /// Overlay box whose bottom center sits on `anchor`
    Tooltip { anchor: Vec2, text: String, color: String },
}

/// Ordered list of draw operations, back to front
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add draw operation - functional style
    pub fn draw(mut self, op: DrawOp) -> Self {
        self.ops.push(op);
        self
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter()
    }

    pub fn polygons(&self) -> impl Iterator<Item = (&[Vec2], &Paint)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Polygon { points, paint } => Some((points.as_slice(), paint)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn tooltip(&self) -> Option<(Vec2, &str)> {
        self.ops.iter().find_map(|op| match op {
            DrawOp::Tooltip { anchor, text, .. } => Some((*anchor, text.as_str())),
            _ => None,
        })
    }
}

impl Extend<DrawOp> for DrawList {
    fn extend<I: IntoIterator<Item = DrawOp>>(&mut self, iter: I) {
        self.ops.extend(iter);
    }
}

impl IntoIterator for DrawList {
    type Item = DrawOp;
    type IntoIter = std::vec::IntoIter<DrawOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

/// Vertex average of a polygon
pub fn centroid(points: &[Vec2]) -> Vec2 {
    if points.is_empty() {
        return Vec2::ZERO;
    }
    points.iter().copied().sum::<Vec2>() / points.len() as f32
}

/// Even-odd point-in-polygon test
pub fn contains_point(points: &[Vec2], p: Vec2) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (a, b) = (points[i], points[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn draw_list_builder_keeps_order() {
        let list = DrawList::new()
            .draw(DrawOp::Polygon { points: square(), paint: Paint::fill("#000") })
            .draw(DrawOp::Text {
                position: Vec2::ZERO,
                text: "A".into(),
                font_size: 12.0,
                color: "#fff".into(),
            });

        assert_eq!(list.len(), 2);
        assert!(matches!(list.ops()[0], DrawOp::Polygon { .. }));
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["A"]);
    }

    #[test]
    fn paint_opacity_is_clamped() {
        assert_eq!(Paint::fill("#fff").with_opacity(2.0).opacity, 1.0);
        assert_eq!(Paint::fill("#fff").with_opacity(-1.0).opacity, 0.0);
    }

    #[test]
    fn centroid_of_square() {
        assert_eq!(centroid(&square()), Vec2::new(5.0, 5.0));
        assert_eq!(centroid(&[]), Vec2::ZERO);
    }

    #[test]
    fn contains_point_inside_and_outside() {
        let sq = square();
        assert!(contains_point(&sq, Vec2::new(5.0, 5.0)));
        assert!(!contains_point(&sq, Vec2::new(15.0, 5.0)));
        assert!(!contains_point(&sq, Vec2::new(5.0, -1.0)));
    }

    #[test]
    fn contains_point_degenerate() {
        let line = [Vec2::ZERO, Vec2::new(10.0, 10.0)];
        assert!(!contains_point(&line, Vec2::new(5.0, 5.0)));

        let flat = [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(5.0, 0.0)];
        assert!(!contains_point(&flat, Vec2::new(5.0, 0.0)));
    }
}
