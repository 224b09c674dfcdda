//! Arithmetic over GF(2^8) with the reduction polynomial x^8 + x^4 + x^3 + x + 1.

/// Low byte of the reduction polynomial (the x^8 term is implied).
pub const REDUCTION_POLY: u8 = 0x1B;

/// Multiplies a field element by x (i.e. `{02}`).
// adapted from https://crypto.stackexchange.com/a/71206
#[inline(always)]
pub const fn dbl(a: u8) -> u8 {
    (a << 1) ^ (REDUCTION_POLY & (0u8).wrapping_sub((a >> 7) & 1))
}

/// Multiplies two field elements: carry-less multiply, reducing whenever the
/// top bit is set before a shift.
#[inline(always)]
pub const fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    let mut i = 0;
    while i < 8 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = dbl(a);
        b >>= 1;
        i += 1;
    }
    product
}

/// Multiplicative inverse, computed as `a^254`. Zero has no inverse and maps to zero.
pub const fn gf_inverse(a: u8) -> u8 {
    // square-and-multiply over the exponent 254 = 0b1111_1110
    let mut result = 1u8;
    let mut base = a;
    let mut exp = 254u8;
    while exp != 0 {
        if exp & 1 != 0 {
            result = gf_mul(result, base);
        }
        base = gf_mul(base, base);
        exp >>= 1;
    }

    if a == 0 { 0 } else { result }
}
