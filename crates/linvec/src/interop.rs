//! Conversions between floating `Vector`s and `nalgebra` column vectors.
//!
//! Converted vectors are untagged: nalgebra data carries no mode.

use nalgebra::{DVector, Vector2, Vector3};

use crate::vector::Vector;

impl Vector<f64> {
    /// Copy into a dynamically sized nalgebra column vector.
    pub fn to_dvector(&self) -> DVector<f64> {
        DVector::from_column_slice(self.coordinates())
    }
}

impl From<&DVector<f64>> for Vector<f64> {
    fn from(v: &DVector<f64>) -> Self {
        v.iter().copied().collect()
    }
}

impl From<DVector<f64>> for Vector<f64> {
    fn from(v: DVector<f64>) -> Self {
        Self::from(&v)
    }
}

impl From<Vector2<f64>> for Vector<f64> {
    fn from(v: Vector2<f64>) -> Self {
        Self::new(vec![v.x, v.y])
    }
}

impl From<Vector3<f64>> for Vector<f64> {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(vec![v.x, v.y, v.z])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn round_trip_through_dvector() {
        let v: Vector<f64> = Vector::new(vec![1.0, -2.0, 3.5, 0.0]);
        let d = v.to_dvector();
        assert_eq!(d.len(), 4);
        assert!((d.norm() - v.magnitude().unwrap()).abs() < 1e-12);
        assert_eq!(Vector::from(d), v);
    }

    #[test]
    fn cross_and_angle_agree_with_nalgebra_seeded() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let a: Vector3<f64> = vector![
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0)
            ];
            let b: Vector3<f64> = vector![
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0)
            ];
            let (va, vb) = (Vector::from(a), Vector::from(b));
            assert_eq!(va.cross(&vb).unwrap(), Vector::from(a.cross(&b)));
            assert!((va.angle(&vb).unwrap() - a.angle(&b)).abs() < 1e-9);
            assert!((va.inner(&vb).unwrap() - a.dot(&b)).abs() < 1e-9);
        }
    }

    #[test]
    fn planar_vectors_convert() {
        let v = Vector::from(Vector2::new(3.0f64, 4.0));
        assert_eq!(v.dimension(), 2);
        assert_eq!(v.magnitude().unwrap(), 5.0);
        assert_eq!(v.mode(), None);
    }
}
