const BYTE_SUFFIXES: [&str; 7] = ["B", "kB", "MB", "GB", "TB", "PB", "EB"];
const SI_BASE: u64 = 1000;

/// Formats a byte count with SI suffixes (`B`, `kB`, `MB`, ...).
///
/// Values under ten print as an integer (`7B`). Larger values are rounded to
/// one decimal and keep that decimal only while below ten, so `8_000_000`
/// prints as `8.0MB` and `12_000_000` as `12MB`.
pub fn bytes(n: u64) -> String {
    if n < 10 {
        return format!("{n}B");
    }

    let mut exp = 0;
    let mut unit = 1u64;
    while exp + 1 < BYTE_SUFFIXES.len() && n / unit >= SI_BASE {
        unit *= SI_BASE;
        exp += 1;
    }

    let suffix = BYTE_SUFFIXES[exp];
    let value = (n as f64 / unit as f64 * 10.0 + 0.5).floor() / 10.0;
    if value < 10.0 {
        format!("{value:.1}{suffix}")
    } else {
        format!("{value:.0}{suffix}")
    }
}

/// Formats an integer with `,` between groups of three digits.
pub fn comma(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
