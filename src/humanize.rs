//! Number and file-size formatting for reports

/// Compressed archive extensions (lower-case, without the dot).
pub const COMPRESSED_EXTENSIONS: [&str; 6] = ["zip", "rar", "gz", "7z", "tar", "bz2"];

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;
const GIB: u64 = 1024 * 1024 * 1024;

/// Fractional digits needed to print any finite `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// `to_fixed` parsed back to a number.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    to_fixed(value, decimals).parse().unwrap_or(value)
}

/// Fixed-point string with `decimals` places.
///
/// Rounds the exact binary value half away from zero, so `1.25` gives
/// `"1.3"` while `0.995` (stored as `0.99499…`) gives `"0.99"`.
pub fn to_fixed(value: f64, decimals: u32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let places = decimals as usize;
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(places))
        .map(|b| b - b'0')
        .collect();
    let mut int_len = int_part.len();

    if frac_part.as_bytes().get(places).is_some_and(|&b| b >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
            int_len += 1;
        }
    }

    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    for (i, digit) in digits.iter().enumerate() {
        if i == int_len {
            out.push('.');
        }
        out.push(char::from(b'0' + digit));
    }
    out
}

/// Human-readable size: `"512 bytes"`, `"2.0 KB"`, `"5.0 MB"`, `"1.5 GB"`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{bytes} bytes")
    } else if bytes < MIB {
        format!("{} KB", to_fixed(bytes as f64 / KIB as f64, 1))
    } else if bytes < GIB {
        format!("{} MB", to_fixed(bytes as f64 / MIB as f64, 1))
    } else {
        format!("{} GB", to_fixed(bytes as f64 / GIB as f64, 1))
    }
}

/// Lower-cased text after the last `.`; the whole name when there is no dot.
pub fn file_extension(file_name: &str) -> String {
    file_name
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

pub fn is_compressed_file(file_name: &str) -> bool {
    let ext = file_extension(file_name);
    COMPRESSED_EXTENSIONS.contains(&ext.as_str())
}
