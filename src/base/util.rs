pub const BOUNDING_SPACES_COUNT: usize = 2;
pub const MIN_DASHES_COUNT: usize = 2;
pub const MIN_TERM_WIDTH: usize = 60;

pub const fn count_digits(n: u64) -> usize {
    if n >= 10000000000000000000 {
        return 20;
    }
    let mut count = 1;
    let mut ceil = 10;
    while n >= ceil {
        ceil *= 10;
        count += 1;
    }
    count
}

/// Formats a count with comma thousands separators.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut s = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            s.push(',');
        }
        s.push(c);
    }
    s
}
