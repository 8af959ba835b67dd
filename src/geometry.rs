//! Geometry values handed through to the conversion engine.

/// Three independent coordinates.
///
/// Carries no meaning of its own; the consumer decides whether it is a
/// position, a normal or an offset.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3D {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_components() {
        let v = Vector3D::new(1.5, -2.0, 0.25);
        assert_eq!(v.x, 1.5);
        assert_eq!(v.y, -2.0);
        assert_eq!(v.z, 0.25);
    }

    #[test]
    fn test_equality_by_value() {
        assert_eq!(Vector3D::new(1.0, 2.0, 3.0), Vector3D::new(1.0, 2.0, 3.0));
        assert_ne!(Vector3D::new(1.0, 2.0, 3.0), Vector3D::new(3.0, 2.0, 1.0));
        assert_eq!(Vector3D::default(), Vector3D::new(0.0, 0.0, 0.0));
    }
}
