// Derived display attribute: the first letter of the alphabet a product name lacks.
//
// - Only ASCII letters a..z count, compared case-insensitively.
// - '_' when the name is blank or uses all 26 letters.

pub const NO_MISSING_LETTER: char = '_';

pub fn missing_letter(name: &str) -> char {
    if name.trim().is_empty() {
        return NO_MISSING_LETTER;
    }

    let mut seen = [false; 26];
    for c in name.chars().map(|c| c.to_ascii_lowercase()) {
        if c.is_ascii_lowercase() {
            seen[(c as u8 - b'a') as usize] = true;
        }
    }

    seen.iter()
        .position(|present| !present)
        .map(|index| (b'a' + index as u8) as char)
        .unwrap_or(NO_MISSING_LETTER)
}
