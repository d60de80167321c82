use rand::Rng;
use rand::seq::IndexedRandom;

pub const NUMBER_MIN: u32 = 1;
pub const NUMBER_MAX: u32 = 1_000_000;

/// Letters, digits and twelve spaces. The repeated spaces make whitespace far
/// more common than any single letter or digit in generated strings.
pub const STRING_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789            ";

/// Lowercase identifier with a length in `lo..=hi`.
pub fn generate_ident<R: Rng + ?Sized>(rng: &mut R, lo: usize, hi: usize) -> String {
    debug_assert!(lo <= hi, "identifier bounds out of order: {lo} > {hi}");
    let length = rng.random_range(lo..=hi);

    (0..length)
        .map(|_| rng.random_range(b'a'..=b'z') as char)
        .collect()
}

/// String payload with a length in `lo..=hi`, drawn from [`STRING_ALPHABET`].
pub fn generate_string<R: Rng + ?Sized>(rng: &mut R, lo: usize, hi: usize) -> String {
    debug_assert!(lo <= hi, "string bounds out of order: {lo} > {hi}");
    let length = rng.random_range(lo..=hi);

    let mut payload = String::with_capacity(length);
    for _ in 0..length {
        // the alphabet is never empty
        if let Some(&c) = STRING_ALPHABET.choose(rng) {
            payload.push(c as char);
        }
    }

    payload
}

pub fn generate_number<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.random_range(NUMBER_MIN..=NUMBER_MAX)
}
