/// Corner of the label rectangle that coincides with its anchor point.
/// `TopLeft` means the rectangle extends left and up from the anchor,
/// `BottomRight` right and down, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl LabelPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Label {
    pub position: LabelPosition,
    pub point: Point,
}

/// A polyline to be labeled. Points and segments are read-only after
/// construction; `label` starts empty and is committed at most once.
#[derive(Debug, Clone)]
pub struct Route {
    pub points: Vec<Point>,
    pub segments: Vec<Segment>,
    pub label: Option<Label>,
}

impl Route {
    /// Builds a route from its ordered point list. Segment `i` joins
    /// point `i` to point `i + 1`, so `k` points yield `k - 1` segments.
    pub fn new(points: Vec<Point>) -> Self {
        let segments = points
            .windows(2)
            .map(|pair| Segment {
                start: pair[0],
                end: pair[1],
            })
            .collect();
        Self {
            points,
            segments,
            label: None,
        }
    }
}
