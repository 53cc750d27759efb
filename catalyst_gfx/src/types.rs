use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub const fn new(x: i64, y: i64) -> Position {
        Position { x, y }
    }

    pub const fn zero() -> Position {
        Position { x: 0, y: 0 }
    }
}

impl core::ops::Add<Position> for Position {
    type Output = Position;
    fn add(self, rhs: Position) -> Position {
        Position {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Position,
    pub max: Position,
}

impl Rect {
    pub const fn new(min: Position, max: Position) -> Rect {
        Rect { min, max }
    }

    pub const fn zero() -> Rect {
        Rect {
            min: Position::new(0, 0),
            max: Position::new(0, 0),
        }
    }

    /// zero-sized rect sitting at `position`
    pub const fn at(position: Position) -> Rect {
        Rect {
            min: position,
            max: position,
        }
    }

    pub const fn from_dimensions(dimensions: Dimension) -> Rect {
        Rect {
            min: Position::new(0, 0),
            max: Position::new(dimensions.width as i64, dimensions.height as i64),
        }
    }

    pub const fn dimensions(&self) -> Dimension {
        Dimension::new(self.width(), self.height())
    }

    pub const fn width(&self) -> u32 {
        (self.max.x - self.min.x) as u32
    }

    pub const fn height(&self) -> u32 {
        (self.max.y - self.min.y) as u32
    }

    pub const fn is_empty(&self) -> bool {
        self.max.x <= self.min.x || self.max.y <= self.min.y
    }

    pub const fn contains(&self, pos: Position) -> bool {
        pos.x >= self.min.x && pos.x < self.max.x && pos.y >= self.min.y && pos.y < self.max.y
    }

    pub const fn translate(&self, offset: Position) -> Rect {
        Rect {
            min: Position {
                x: self.min.x + offset.x,
                y: self.min.y + offset.y,
            },
            max: Position {
                x: self.max.x + offset.x,
                y: self.max.y + offset.y,
            },
        }
    }

    /// smallest rect containing both. empty rects don't contribute.
    pub fn union(&self, other: &Rect) -> Rect {
        if other.is_empty() {
            return *self;
        }
        if self.is_empty() {
            return *other;
        }

        Rect {
            min: Position::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Position::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub width: u32,
    pub height: u32,
}

impl Dimension {
    pub const fn new(width: u32, height: u32) -> Dimension {
        Dimension { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    /// plain average, good enough for a monochrome panel
    pub const fn luma(&self) -> u8 {
        ((self.r as u16 + self.g as u16 + self.b as u16) / 3) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_add_componentwise() {
        let pen = Position::new(10, 40) + Position::new(-2, -13);
        assert_eq!(pen, Position::new(8, 27));
        assert_eq!(pen + Position::zero(), pen);
    }

    #[test]
    fn union_ignores_empty_rects() {
        let a = Rect::new(Position::new(2, 3), Position::new(5, 8));
        assert_eq!(a.union(&Rect::zero()), a);
        assert_eq!(Rect::at(Position::new(-4, -4)).union(&a), a);
    }

    #[test]
    fn union_spans_both() {
        let a = Rect::new(Position::new(0, -10), Position::new(4, 2));
        let b = Rect::new(Position::new(3, -2), Position::new(9, 5));
        let u = a.union(&b);
        assert_eq!(u.min, Position::new(0, -10));
        assert_eq!(u.max, Position::new(9, 5));
        assert_eq!(u.dimensions(), Dimension::new(9, 15));
    }

    #[test]
    fn contains_is_half_open() {
        let r = Rect::from_dimensions(Dimension::new(4, 4));
        assert!(r.contains(Position::new(0, 0)));
        assert!(r.contains(Position::new(3, 3)));
        assert!(!r.contains(Position::new(4, 0)));
        assert!(!r.contains(Position::new(0, -1)));
    }

    #[test]
    fn luma_averages_channels() {
        assert_eq!(Color::WHITE.luma(), 255);
        assert_eq!(Color::BLACK.luma(), 0);
        assert_eq!(Color::new(30, 60, 90).luma(), 60);
    }
}
