//! Commonly used alphabets.

pub const BASE2: &str = "01";
pub const BASE8: &str = "01234567";
pub const BASE10: &str = "0123456789";
pub const BASE16: &str = "0123456789ABCDEF";
pub const BASE32: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
pub const BASE32_LOWER: &str = "abcdefghijklmnopqrstuvwxyz234567";
pub const BASE36: &str = "0123456789abcdefghijklmnopqrstuvwxyz";
pub const BASE58: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
pub const BASE62: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
pub const BASE64: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
pub const BASE64_URL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

const PRESETS: [(&str, &str); 11] = [
    ("base2", BASE2),
    ("base8", BASE8),
    ("base10", BASE10),
    ("base16", BASE16),
    ("base32", BASE32),
    ("base32-lower", BASE32_LOWER),
    ("base36", BASE36),
    ("base58", BASE58),
    ("base62", BASE62),
    ("base64", BASE64),
    ("base64url", BASE64_URL),
];

pub fn find(name: &str) -> Option<&'static str> {
    PRESETS.iter().find(|(preset, _)| preset.eq_ignore_ascii_case(name)).map(|&(_, alphabet)| alphabet)
}

pub fn names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|&(name, _)| name)
}
