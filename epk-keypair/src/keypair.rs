use crate::KeyError;

use epk_curve::{BigUint, Curve, CurvePoint, EllipticCurve};
use num_traits::Zero;

/// A public and/or private key on a fixed curve.
///
/// Every instance went through [`Keypair::new`], so a present public key is
/// always a finite point on `curve` with coordinates below `2^bit_size`, and a
/// present private key is below `2^bit_size`. Whether the two keys belong
/// together is not checked, see [`Keypair::is_consistent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypair {
    curve: Curve,
    public_key: Option<CurvePoint>,
    private_key: Option<BigUint>,
}

impl Keypair {
    pub fn new(
        curve: Curve,
        public_key: Option<CurvePoint>,
        private_key: Option<BigUint>,
    ) -> Result<Self, KeyError> {
        let bound = curve.params().coordinate_bound();
        let bit_size = curve.bit_size();

        if let Some(point) = &public_key {
            let (x, y) = point.coordinates().ok_or(KeyError::IdentityPublicKey)?;
            if x >= &bound {
                return Err(KeyError::OversizedX(bit_size));
            }
            if y >= &bound {
                return Err(KeyError::OversizedY(bit_size));
            }
            if !curve.is_on_curve(point) {
                return Err(KeyError::NotOnCurve);
            }
        }

        if let Some(scalar) = &private_key {
            if scalar >= &bound {
                return Err(KeyError::OversizedPrivateKey(bit_size));
            }
        }

        Ok(Self {
            curve,
            public_key,
            private_key,
        })
    }

    /// Builds a full keypair with public key `private_key * G`.
    pub fn from_private_key(curve: Curve, private_key: BigUint) -> Result<Self, KeyError> {
        if private_key >= curve.params().coordinate_bound() {
            return Err(KeyError::OversizedPrivateKey(curve.bit_size()));
        }
        let public_key = curve.multiply(&curve.base_point(), &private_key)?;
        Self::new(curve, Some(public_key), Some(private_key))
    }

    pub fn curve(&self) -> Curve {
        self.curve
    }

    pub fn public_key(&self) -> Option<&CurvePoint> {
        self.public_key.as_ref()
    }

    pub fn private_key(&self) -> Option<&BigUint> {
        self.private_key.as_ref()
    }

    pub fn has_public_key(&self) -> bool {
        self.public_key.is_some()
    }

    pub fn has_private_key(&self) -> bool {
        self.private_key.is_some()
    }

    /// Returns `true` iff both keys are present and `public == private * G`.
    pub fn is_consistent(&self) -> Result<bool, KeyError> {
        match (&self.public_key, &self.private_key) {
            (Some(public), Some(private)) if !private.is_zero() => {
                let derived = self.curve.multiply(&self.curve.base_point(), private)?;
                Ok(&derived == public)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn hex(s: &str) -> BigUint {
        BigUint::parse_bytes(s.as_bytes(), 16).unwrap()
    }

    fn sample_public() -> CurvePoint {
        CurvePoint::new(
            hex("ad7e833aeda2734597cd9bf959c66644"),
            hex("3967e93250b2234b1693ba62e367bd5a"),
        )
    }

    #[test]
    fn construction_with_valid_keys() {
        let curve = Curve::Secp128r1;
        let keypair =
            Keypair::new(curve, Some(sample_public()), Some(hex("1234567890abcdef"))).unwrap();
        assert!(keypair.has_public_key());
        assert!(keypair.has_private_key());
        assert_eq!(keypair.curve(), Curve::Secp128r1);
        assert_eq!(keypair.public_key(), Some(&sample_public()));
        assert_eq!(keypair.private_key(), Some(&hex("1234567890abcdef")));
        assert_eq!(keypair.is_consistent(), Ok(true));

        let public_only = Keypair::new(curve, Some(curve.base_point()), None).unwrap();
        assert!(public_only.has_public_key());
        assert!(!public_only.has_private_key());
        assert_eq!(public_only.is_consistent(), Ok(false));

        let empty = Keypair::new(curve, None, None).unwrap();
        assert!(!empty.has_public_key());
        assert!(!empty.has_private_key());
    }

    #[test]
    fn zero_private_key_is_present() {
        let keypair = Keypair::new(Curve::Secp128r1, None, Some(BigUint::zero())).unwrap();
        assert!(keypair.has_private_key());
        assert_eq!(keypair.is_consistent(), Ok(false));
    }

    #[test]
    fn derived_public_key() {
        let keypair = Keypair::from_private_key(Curve::Secp128r1, hex("1234567890abcdef")).unwrap();
        assert_eq!(keypair.public_key(), Some(&sample_public()));
        assert_eq!(keypair.is_consistent(), Ok(true));

        let mismatched =
            Keypair::new(Curve::Secp128r1, Some(Curve::Secp128r1.base_point()), Some(hex("02")))
                .unwrap();
        assert_eq!(mismatched.is_consistent(), Ok(false));

        assert_eq!(
            Keypair::from_private_key(Curve::Secp128r1, BigUint::zero()),
            Err(KeyError::Arithmetic(epk_curve::ArithmeticError::ZeroScalar))
        );
        // order * G is the point at infinity
        assert_eq!(
            Keypair::from_private_key(Curve::Secp128r1, Curve::Secp128r1.order().clone()),
            Err(KeyError::IdentityPublicKey)
        );
    }

    #[test]
    fn oversized_coordinates() {
        let curve = Curve::Secp128r1;
        let bound = curve.params().coordinate_bound();
        let y = sample_public().y().unwrap().clone();
        let x = sample_public().x().unwrap().clone();

        assert_eq!(
            Keypair::new(curve, Some(CurvePoint::new(bound.clone(), y)), None),
            Err(KeyError::OversizedX(128))
        );
        assert_eq!(
            Keypair::new(curve, Some(CurvePoint::new(x, bound.clone())), None),
            Err(KeyError::OversizedY(128))
        );
        assert_eq!(
            Keypair::new(curve, None, Some(bound.clone())),
            Err(KeyError::OversizedPrivateKey(128))
        );
        assert_eq!(
            Keypair::from_private_key(curve, bound),
            Err(KeyError::OversizedPrivateKey(128))
        );
        // largest accepted scalar
        let max = curve.params().coordinate_bound() - 1u8;
        assert!(Keypair::new(curve, None, Some(max)).is_ok());
    }

    #[test]
    fn invalid_public_points() {
        let curve = Curve::Secp128r1;
        let g = curve.base_point();
        let off_curve = CurvePoint::new(g.x().unwrap().clone(), g.y().unwrap() + 1u8);
        assert_eq!(
            Keypair::new(curve, Some(off_curve), None),
            Err(KeyError::NotOnCurve)
        );
        assert_eq!(
            Keypair::new(curve, Some(CurvePoint::new(BigUint::zero(), BigUint::zero())), None),
            Err(KeyError::NotOnCurve)
        );
        assert_eq!(
            Keypair::new(curve, Some(CurvePoint::Infinity), None),
            Err(KeyError::IdentityPublicKey)
        );
    }
}
