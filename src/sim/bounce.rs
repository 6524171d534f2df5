//! A rectangle that travels in a straight line and reflects off walls

use glam::Vec2;

use super::rect::Rect;

#[derive(Debug, Clone, PartialEq)]
pub struct BouncingBox {
    /// Top-left corner
    pub pos: Vec2,
    /// Travel direction; not normalized, so (1, 1) moves `speed` along each axis
    pub dir: Vec2,
    /// Pixels per second
    pub speed: f32,
    pub size: Vec2,
}

impl BouncingBox {
    pub fn new(pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            pos,
            dir: Vec2::ONE,
            speed,
            size,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size.x, self.size.y)
    }

    /// Move by `dt`, then reflect and clamp against any wall the box crossed.
    /// A box larger than the walls pins to the left/top edge.
    pub fn step(&mut self, dt: f32, walls: &Rect) {
        self.pos += self.dir * self.speed * dt;

        let rect = self.rect();
        if rect.left < walls.left {
            self.dir.x = -self.dir.x;
            self.pos.x = walls.left;
        } else if rect.right > walls.right {
            self.dir.x = -self.dir.x;
            self.pos.x = (walls.right - self.size.x).max(walls.left);
        }
        if rect.top < walls.top {
            self.dir.y = -self.dir.y;
            self.pos.y = walls.top;
        } else if rect.bottom > walls.bottom {
            self.dir.y = -self.dir.y;
            self.pos.y = (walls.bottom - self.size.y).max(walls.top);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const WALLS: Rect = Rect::new(0.0, 800.0, 0.0, 600.0);

    #[test]
    fn test_moves_along_direction() {
        let mut b = BouncingBox::new(Vec2::new(100.0, 100.0), Vec2::new(50.0, 20.0), 200.0);
        b.step(0.5, &WALLS);
        assert_eq!(b.pos, Vec2::new(200.0, 200.0));
        assert_eq!(b.dir, Vec2::ONE);
    }

    #[test]
    fn test_reflects_off_right_wall() {
        let mut b = BouncingBox::new(Vec2::new(745.0, 100.0), Vec2::new(50.0, 20.0), 200.0);
        b.step(0.1, &WALLS);
        assert_eq!(b.dir, Vec2::new(-1.0, 1.0));
        assert_eq!(b.pos.x, 750.0);
        assert_eq!(b.rect().right, 800.0);
    }

    #[test]
    fn test_reflects_off_top_left_corner() {
        let mut b = BouncingBox::new(Vec2::new(5.0, 5.0), Vec2::new(50.0, 20.0), 200.0);
        b.dir = Vec2::new(-1.0, -1.0);
        b.step(0.1, &WALLS);
        assert_eq!(b.dir, Vec2::ONE);
        assert_eq!(b.pos, Vec2::ZERO);
    }

    #[test]
    fn test_oversized_box_pins_to_origin() {
        let mut b = BouncingBox::new(Vec2::ZERO, Vec2::new(900.0, 700.0), 200.0);
        b.step(0.01, &WALLS);
        assert_eq!(b.pos, Vec2::ZERO);
    }

    proptest! {
        #[test]
        fn prop_box_stays_within_walls(
            x in 0.0f32..750.0,
            y in 0.0f32..580.0,
            flip_x in any::<bool>(),
            flip_y in any::<bool>(),
            steps in 1usize..2000,
            dt in 0.0001f32..0.0025,
        ) {
            let mut b = BouncingBox::new(Vec2::new(x, y), Vec2::new(50.0, 20.0), 200.0);
            if flip_x { b.dir.x = -1.0; }
            if flip_y { b.dir.y = -1.0; }
            for _ in 0..steps {
                b.step(dt, &WALLS);
                prop_assert!(WALLS.contains_rect(&b.rect()), "{:?} escaped", b.rect());
            }
        }
    }
}
