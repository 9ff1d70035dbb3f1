//! Collision detection and response for axis-aligned rectangles
//!
//! Separating-axis test on the two coordinate axes. Overlaps are resolved
//! along the axis of least penetration, so normals are always one of
//! (±1, 0) or (0, ±1).

use glam::Vec2;

use super::rect::Rect;

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Collision {
    /// Displacement that moves the moving rectangle out of the obstacle
    pub penetration: Vec2,
    /// Surface normal (pointing toward the moving rectangle); zero on a miss
    pub normal: Vec2,
}

impl Collision {
    pub fn miss() -> Self {
        Self::default()
    }

    /// Whether a collision occurred
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.normal != Vec2::ZERO
    }

    fn along_x(depth: f32, sign: f32) -> Self {
        Self {
            penetration: Vec2::new(depth * sign, 0.0),
            normal: Vec2::new(sign, 0.0),
        }
    }

    fn along_y(depth: f32, sign: f32) -> Self {
        Self {
            penetration: Vec2::new(0.0, depth * sign),
            normal: Vec2::new(0.0, sign),
        }
    }
}

/// Check collision between a moving rectangle and a static one
///
/// Touching edges (zero overlap on either axis) are not a collision. When
/// the penetration depth is equal on both axes the Y axis wins.
pub fn resolve(moving: &Rect, fixed: &Rect) -> Collision {
    let delta = fixed.center() - moving.center();
    let reach = moving.half_extents() + fixed.half_extents();
    let px = reach.x - delta.x.abs();
    let py = reach.y - delta.y.abs();

    if px <= 0.0 || py <= 0.0 {
        return Collision::miss();
    }

    // Push away from the fixed rectangle's center
    let sign_x = 1.0_f32.copysign(-delta.x);
    let sign_y = 1.0_f32.copysign(-delta.y);

    if px < py {
        Collision::along_x(px, sign_x)
    } else {
        Collision::along_y(py, sign_y)
    }
}

/// Check a rectangle against the arena bounds `[0, arena.x] x [0, arena.y]`
///
/// Walls are tested in order left, bottom, right, top; only the first one
/// crossed is reported.
pub fn wall_collision(rect: &Rect, arena: Vec2) -> Collision {
    let min = rect.pos;
    let max = rect.pos + rect.size();

    if min.x < 0.0 {
        Collision::along_x(-min.x, 1.0)
    } else if min.y < 0.0 {
        Collision::along_y(-min.y, 1.0)
    } else if max.x > arena.x {
        Collision::along_x(max.x - arena.x, -1.0)
    } else if max.y > arena.y {
        Collision::along_y(max.y - arena.y, -1.0)
    } else {
        Collision::miss()
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), w, h, [1.0; 4])
    }

    const AXES: [Vec2; 4] = [
        Vec2::new(1.0, 0.0),
        Vec2::new(-1.0, 0.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(0.0, -1.0),
    ];

    #[test]
    fn test_touching_is_not_a_collision() {
        let fixed = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!resolve(&rect(10.0, 0.0, 10.0, 10.0), &fixed).is_hit());
        assert!(!resolve(&rect(0.0, 10.0, 10.0, 10.0), &fixed).is_hit());
        assert!(!resolve(&rect(-10.0, -10.0, 10.0, 10.0), &fixed).is_hit());
    }

    #[test]
    fn test_resolve_pushes_out_along_x() {
        // Moving box overlaps the left side of the fixed box by 2 units
        let fixed = rect(10.0, 0.0, 10.0, 10.0);
        let moving = rect(2.0, 0.0, 10.0, 10.0);

        let c = resolve(&moving, &fixed);
        assert_eq!(c.normal, Vec2::new(-1.0, 0.0));
        assert_eq!(c.penetration, Vec2::new(-2.0, 0.0));

        let corrected = moving.moved_to(moving.pos + c.penetration);
        assert_eq!(corrected.pos.x + corrected.width, fixed.pos.x);
        assert!(!resolve(&corrected, &fixed).is_hit());
    }

    #[test]
    fn test_resolve_pushes_out_along_y() {
        // Moving box sits 3 units into the top of the fixed box
        let fixed = rect(0.0, 0.0, 40.0, 10.0);
        let moving = rect(15.0, 7.0, 10.0, 10.0);

        let c = resolve(&moving, &fixed);
        assert_eq!(c.normal, Vec2::new(0.0, 1.0));
        assert_eq!(c.penetration, Vec2::new(0.0, 3.0));
    }

    #[test]
    fn test_equal_penetration_picks_y_axis() {
        // 2 units of overlap on both axes
        let fixed = rect(0.0, 0.0, 10.0, 10.0);
        let moving = rect(8.0, 8.0, 10.0, 10.0);

        let c = resolve(&moving, &fixed);
        assert_eq!(c.normal, Vec2::new(0.0, 1.0));
        assert_eq!(c.penetration, Vec2::new(0.0, 2.0));
    }

    #[test]
    fn test_walls() {
        let arena = Vec2::new(640.0, 480.0);

        let inside = wall_collision(&rect(100.0, 100.0, 10.0, 10.0), arena);
        assert!(!inside.is_hit());

        let left = wall_collision(&rect(-3.0, 100.0, 10.0, 10.0), arena);
        assert_eq!(left.normal, Vec2::new(1.0, 0.0));
        assert_eq!(left.penetration, Vec2::new(3.0, 0.0));

        let bottom = wall_collision(&rect(100.0, -4.0, 10.0, 10.0), arena);
        assert_eq!(bottom.normal, Vec2::new(0.0, 1.0));
        assert_eq!(bottom.penetration, Vec2::new(0.0, 4.0));

        let right = wall_collision(&rect(635.0, 100.0, 10.0, 10.0), arena);
        assert_eq!(right.normal, Vec2::new(-1.0, 0.0));
        assert_eq!(right.penetration, Vec2::new(-5.0, 0.0));

        let top = wall_collision(&rect(100.0, 472.0, 10.0, 10.0), arena);
        assert_eq!(top.normal, Vec2::new(0.0, -1.0));
        assert_eq!(top.penetration, Vec2::new(0.0, -2.0));
    }

    #[test]
    fn test_wall_corner_reports_first_wall_only() {
        let arena = Vec2::new(640.0, 480.0);
        let c = wall_collision(&rect(-1.0, -1.0, 10.0, 10.0), arena);
        assert_eq!(c.normal, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_reflect_velocity() {
        // Ball moving right, hits vertical wall (normal pointing left)
        let velocity = Vec2::new(100.0, 0.0);
        let normal = Vec2::new(-1.0, 0.0);

        let reflected = reflect_velocity(velocity, normal);
        assert!((reflected.x - (-100.0)).abs() < 0.001);
        assert!(reflected.y.abs() < 0.001);
    }

    proptest! {
        #[test]
        fn separated_boxes_never_collide(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 1.0f32..200.0, ah in 1.0f32..200.0,
            bw in 1.0f32..200.0, bh in 1.0f32..200.0,
            gap in 0.1f32..100.0, by in -500.0f32..500.0,
            on_x in any::<bool>(),
        ) {
            let a = rect(ax, ay, aw, ah);
            let b = if on_x {
                rect(ax + aw + gap, by, bw, bh)
            } else {
                rect(by, ay + ah + gap, bw, bh)
            };
            prop_assert!(!resolve(&a, &b).is_hit());
            prop_assert!(!resolve(&b, &a).is_hit());
            prop_assert_eq!(resolve(&a, &b).normal, Vec2::ZERO);
        }

        #[test]
        fn overlapping_boxes_resolve_on_one_axis(
            ax in -200.0f32..200.0, ay in -200.0f32..200.0,
            aw in 1.0f32..100.0, ah in 1.0f32..100.0,
            bw in 1.0f32..100.0, bh in 1.0f32..100.0,
            fx in -0.95f32..0.95, fy in -0.95f32..0.95,
        ) {
            let a = rect(ax, ay, aw, ah);
            let reach = Vec2::new(aw + bw, ah + bh) * 0.5;
            let b_center = a.center() + Vec2::new(fx * reach.x, fy * reach.y);
            let b = rect(b_center.x - bw / 2.0, b_center.y - bh / 2.0, bw, bh);

            let c = resolve(&a, &b);
            prop_assert!(c.is_hit());
            prop_assert!(AXES.contains(&c.normal));

            // Moving by the penetration leaves the boxes touching on that axis
            let corrected = a.moved_to(a.pos + c.penetration);
            let delta = (b.center() - corrected.center()).abs();
            let gap = delta - (corrected.half_extents() + b.half_extents());
            let axis_gap = if c.normal.x != 0.0 { gap.x } else { gap.y };
            prop_assert!(axis_gap.abs() < 1e-3, "gap {}", axis_gap);
        }

        #[test]
        fn reflection_reverses_normal_and_keeps_tangent(
            vx in -1000.0f32..1000.0, vy in -1000.0f32..1000.0,
            angle in 0.0f32..std::f32::consts::TAU,
        ) {
            let v = Vec2::new(vx, vy);
            let n = Vec2::from_angle(angle);
            let t = n.perp();
            let r = reflect_velocity(v, n);

            prop_assert!((r.dot(n) + v.dot(n)).abs() < 1e-2);
            prop_assert!((r.dot(t) - v.dot(t)).abs() < 1e-2);
        }

        #[test]
        fn axis_reflection_is_exact(
            vx in -1000.0f32..1000.0, vy in -1000.0f32..1000.0,
            axis in 0usize..4,
        ) {
            let v = Vec2::new(vx, vy);
            let n = AXES[axis];
            let r = reflect_velocity(v, n);
            prop_assert_eq!(r.dot(n), -v.dot(n));
            prop_assert_eq!(r.dot(n.perp()), v.dot(n.perp()));
        }
    }
}
