/// Trait for types that can detect collisions between `Self` and `T`.
///
/// Two shapes that merely touch along an edge do not collide.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}
