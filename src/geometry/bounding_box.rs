use crate::geometry::{LineString, Point, Polygon};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl BoundingBox {
    /// The box around every non-empty point, or `None` if there is none.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        let mut rect: Option<BoundingBox> = None;
        for coord in points.into_iter().filter_map(Point::coord) {
            match rect.as_mut() {
                Some(rect) => rect.update(coord.x, coord.y),
                None => {
                    rect = Some(BoundingBox {
                        minx: coord.x,
                        miny: coord.y,
                        maxx: coord.x,
                        maxy: coord.y,
                    })
                }
            }
        }
        rect
    }

    fn update(&mut self, x: f64, y: f64) {
        if x < self.minx {
            self.minx = x;
        }
        if y < self.miny {
            self.miny = y;
        }
        if x > self.maxx {
            self.maxx = x;
        }
        if y > self.maxy {
            self.maxy = y;
        }
    }

    /// The smallest box containing both boxes.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            minx: self.minx.min(other.minx),
            miny: self.miny.min(other.miny),
            maxx: self.maxx.max(other.maxx),
            maxy: self.maxy.max(other.maxy),
        }
    }

    pub fn width(&self) -> f64 {
        self.maxx - self.minx
    }

    pub fn height(&self) -> f64 {
        self.maxy - self.miny
    }

    /// The closed counter-clockwise ring around this box, starting at the lower-right corner.
    pub fn to_polygon(&self) -> Polygon {
        let ring = LineString::new_unchecked(vec![
            Point::new(self.maxx, self.miny),
            Point::new(self.maxx, self.maxy),
            Point::new(self.minx, self.maxy),
            Point::new(self.minx, self.miny),
            Point::new(self.maxx, self.miny),
        ]);
        Polygon::new_unchecked(vec![ring])
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::GeometryTrait;

    #[test]
    fn from_points_skips_empty() {
        let points = [Point::new(3., -1.), Point::empty(), Point::new(-2., 4.)];
        let rect = BoundingBox::from_points(points.iter()).unwrap();
        assert_eq!(
            rect,
            BoundingBox {
                minx: -2.,
                miny: -1.,
                maxx: 3.,
                maxy: 4.
            }
        );
        assert_eq!(rect.width(), 5.);
        assert_eq!(rect.height(), 5.);
    }

    #[test]
    fn no_points_no_box() {
        assert!(BoundingBox::from_points([Point::empty()].iter()).is_none());
    }

    #[test]
    fn box_polygon_is_closed() {
        let rect = BoundingBox {
            minx: 0.,
            miny: 0.,
            maxx: 2.,
            maxy: 1.,
        };
        let polygon = rect.to_polygon();
        assert!(polygon.exterior().unwrap().is_closed());
        assert_eq!(polygon.bounding_box(), Some(rect));
    }
}
