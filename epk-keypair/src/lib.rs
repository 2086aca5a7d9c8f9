#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

mod keypair;
pub mod record;

pub use epk_curve::{BigUint, Curve, CurvePoint, EllipticCurve};
pub use keypair::Keypair;
pub use record::{RecordError, Section};

use epk_curve::ArithmeticError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("no curve specified")]
    MissingCurve,
    #[error("public key x-coordinate does not fit into {0} bits")]
    OversizedX(u64),
    #[error("public key y-coordinate does not fit into {0} bits")]
    OversizedY(u64),
    #[error("public key is not a valid curve point")]
    NotOnCurve,
    #[error("public key is the point at infinity")]
    IdentityPublicKey,
    #[error("private key does not fit into {0} bits")]
    OversizedPrivateKey(u64),
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}
