//! Some helper functions

/// Number of binary digits needed to write a value.
///
/// Zero is written with a single digit, as its binary string is "0".
///
/// ```
/// # use qmkit::tools::bit_length;
/// assert_eq!(bit_length(0), 1);
/// assert_eq!(bit_length(5), 3);
/// assert_eq!(bit_length(1023), 10);
/// assert_eq!(bit_length(1024), 11);
/// ```
pub fn bit_length(value: u32) -> usize {
    ((u32::BITS - value.leading_zeros()) as usize).max(1)
}

/// Alphabetic label of an index: a, b, ..., z, aa, ab, ...
///
/// ```
/// # use qmkit::tools::letter_label;
/// assert_eq!(letter_label(0), "a");
/// assert_eq!(letter_label(25), "z");
/// assert_eq!(letter_label(26), "aa");
/// assert_eq!(letter_label(27), "ab");
/// ```
pub fn letter_label(index: usize) -> String {
    let mut label = vec![];
    let mut rem = index + 1;
    while rem > 0 {
        rem -= 1;
        label.push((b'a' + (rem % 26) as u8) as char);
        rem /= 26;
    }
    label.iter().rev().collect()
}
