//! Modular arithmetic over the curve prime.
//!
//! Everything here is plain number theory on 256-bit integers: modular
//! exponentiation, the Legendre symbol, and Tonelli-Shanks square roots.
//! `crypto-bigint`'s `DynResidue` supplies the Montgomery arithmetic so no
//! intermediate ever overflows a fixed width.

use crate::CryptoError;
use crypto_bigint::modular::runtime_mod::{DynResidue, DynResidueParams};
use crypto_bigint::{Encoding, Integer, U256};

/// `base^exp mod modulus` by square-and-multiply. The modulus must be odd.
pub fn mod_pow(base: &U256, exp: &U256, modulus: &U256) -> U256 {
    let params = DynResidueParams::new(modulus);
    let mut acc = DynResidue::new(&U256::ONE, params);
    let mut base = DynResidue::new(base, params);
    let mut exp = *exp;

    while exp != U256::ZERO {
        if bool::from(exp.is_odd()) {
            acc *= base;
        }
        base = base.square();
        exp = exp.shr_vartime(1);
    }

    acc.retrieve()
}

/// Legendre symbol of `a` modulo the odd prime `p`: +1 for a quadratic
/// residue, -1 for a non-residue, 0 when `p` divides `a`.
pub fn legendre_symbol(a: &U256, p: &U256) -> i8 {
    let exp = p.wrapping_sub(&U256::ONE).shr_vartime(1);
    let ls = mod_pow(a, &exp, p);
    if ls == U256::ONE {
        1
    } else if ls == p.wrapping_sub(&U256::ONE) {
        -1
    } else {
        0
    }
}

/// Square roots of `a` modulo the odd prime `p` via Tonelli-Shanks.
///
/// Returns the root pair `(r, p - r)`. A non-residue input is an error,
/// never a garbage value.
pub fn sqrt_mod(a: &U256, p: &U256) -> Result<(U256, U256), CryptoError> {
    if legendre_symbol(a, p) != 1 {
        return Err(CryptoError::NonResidue(hex::encode(a.to_be_bytes())));
    }

    // Factor p - 1 = q * 2^s with q odd.
    let mut q = p.wrapping_sub(&U256::ONE);
    let mut s = 0u32;
    while !bool::from(q.is_odd()) {
        q = q.shr_vartime(1);
        s += 1;
    }

    // p == 3 (mod 4): the root is a^((p+1)/4) directly.
    if s == 1 {
        let r = mod_pow(a, &p.wrapping_add(&U256::ONE).shr_vartime(2), p);
        return Ok((r, neg_mod(&r, p)));
    }

    // Find a quadratic non-residue z.
    let mut z = U256::from_u8(2);
    while legendre_symbol(&z, p) != -1 {
        z = z.wrapping_add(&U256::ONE);
    }

    let params = DynResidueParams::new(p);
    let mut c = DynResidue::new(&mod_pow(&z, &q, p), params);
    let mut r = DynResidue::new(
        &mod_pow(a, &q.wrapping_add(&U256::ONE).shr_vartime(1), p),
        params,
    );
    let mut t = DynResidue::new(&mod_pow(a, &q, p), params);
    let mut m = s;

    loop {
        if t.retrieve() == U256::ONE {
            let root = r.retrieve();
            return Ok((root, neg_mod(&root, p)));
        }

        // Least i in (0, m) with t^(2^i) == 1.
        let mut i = 0u32;
        let mut probe = t;
        while probe.retrieve() != U256::ONE {
            probe = probe.square();
            i += 1;
            if i == m {
                // Unreachable for residue inputs; guard the loop anyway.
                return Err(CryptoError::NonResidue(hex::encode(a.to_be_bytes())));
            }
        }

        let mut b = c;
        for _ in 0..(m - i - 1) {
            b = b.square();
        }

        r *= b;
        c = b.square();
        t *= c;
        m = i;
    }
}

/// Additive inverse mod `p`; 0 maps to itself.
fn neg_mod(r: &U256, p: &U256) -> U256 {
    if *r == U256::ZERO {
        U256::ZERO
    } else {
        p.wrapping_sub(r)
    }
}
