//! # Principal Sources
//!
//! The boundary to the upstream identity/session component. Whatever holds
//! the caller's identity implements [`PrincipalSource`]; the assembler asks
//! it for a [`Principal`] and turns a refusal into
//! `AccountIdError::InvalidPrincipal`.

use acctid_core::{Principal, PrincipalError};

/// Something that can hand over the principal of the current actor.
pub trait PrincipalSource {
    /// The principal, or why it cannot be produced.
    fn principal(&self) -> Result<Principal, PrincipalError>;
}

impl PrincipalSource for Principal {
    fn principal(&self) -> Result<Principal, PrincipalError> {
        Ok(*self)
    }
}

/// Raw principal bytes.
impl PrincipalSource for [u8] {
    fn principal(&self) -> Result<Principal, PrincipalError> {
        Principal::from_slice(self)
    }
}

/// Principal text form.
impl PrincipalSource for str {
    fn principal(&self) -> Result<Principal, PrincipalError> {
        Principal::from_text(self)
    }
}

impl PrincipalSource for String {
    fn principal(&self) -> Result<Principal, PrincipalError> {
        Principal::from_text(self)
    }
}

/// An absent identity.
impl<T: PrincipalSource> PrincipalSource for Option<T> {
    fn principal(&self) -> Result<Principal, PrincipalError> {
        match self {
            Some(inner) => inner.principal(),
            None => Err(PrincipalError::Missing),
        }
    }
}

impl<T: PrincipalSource + ?Sized> PrincipalSource for &T {
    fn principal(&self) -> Result<Principal, PrincipalError> {
        (**self).principal()
    }
}
