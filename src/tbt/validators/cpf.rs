/// Number of digits in a CPF, the last two being check digits
pub const CPF_LENGTH: usize = 11;

/// Keeps only the ASCII digits of `raw`, so `"529.982.247-25"` becomes `"52998224725"`
pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validates a CPF with the modulo-11 check digit algorithm.
///
/// Separators are ignored. Anything that isn't exactly 11 digits after stripping, or that repeats
/// a single digit eleven times, is rejected before the check digits are computed.
pub fn is_valid_cpf(raw: &str) -> bool {
    let digits: Vec<u32> = raw.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() != CPF_LENGTH {
        return false;
    }

    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    (CPF_LENGTH - 2..CPF_LENGTH).all(|position| check_digit(&digits[..position]) == digits[position])
}

/// Computes the check digit that follows `prefix` (9 digits for the first, 10 for the second)
fn check_digit(prefix: &[u32]) -> u32 {
    let weight_start = prefix.len() as u32 + 1;

    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(idx, digit)| digit * (weight_start - idx as u32))
        .sum();

    match (sum * 10) % 11 {
        10 => 0,
        digit => digit,
    }
}
