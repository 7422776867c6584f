//! Collision Detection
//!
//! A single pure predicate deciding whether two axis-aligned boxes overlap.
//! The vertical axis is tested one frame ahead: the test asks where `a`'s
//! bottom face will be after its velocity is applied, not where it is now.
//! With discrete per-frame stepping a fast-falling box can otherwise skip
//! past a thin slab in the frame gravity lands it, so the contact has to be
//! detected before the position is integrated.
//!
//! The formula is intentionally asymmetric - only `a`'s velocity is read.
//! Callers pass the moving/controlled box as `a` (the player against an
//! enemy, a falling box against the ground).

use super::entity::Entity;

/// Test whether `a` overlaps `b` on all three axes.
///
/// Both entities' faces must have been refreshed for the current frame
/// before calling this.
pub fn boxes_collide(a: &Entity, b: &Entity) -> bool {
    let af = a.faces();
    let bf = b.faces();

    let z_overlap = af.front >= bf.back && af.back <= bf.front;
    let x_overlap = af.right >= bf.left && af.left <= bf.right;
    // One-frame lookahead on y: compare a's *next* bottom against b's top.
    let y_overlap = af.bottom + a.velocity.y <= bf.top && af.top >= bf.bottom;

    x_overlap && y_overlap && z_overlap
}
