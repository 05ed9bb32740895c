// Locale-aware ordering of product names.
//
// Names are compared in three levels, the way a browser's `localeCompare`
// behaves for Latin text:
// - primary: base letters, ignoring accents and case ("é" == "E"),
//   with spaces and punctuation before digits and digits before letters,
// - secondary: accents ("e" < "é"),
// - tertiary: case, lowercase first ("a" < "A").
//
// Names are decomposed to NFD first, so precomposed and combining accents weigh the same.

use crate::modules::catalog::core::product::Product;
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Primary {
    Symbol(char),
    Digit(u32),
    Letter(char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Unit {
    primary: Primary,
    accents: Vec<u8>,
    upper: bool,
}

fn accent_rank(mark: char) -> u8 {
    match mark {
        '\u{0301}' => 1,  // acute
        '\u{0300}' => 2,  // grave
        '\u{0306}' => 3,  // breve
        '\u{0302}' => 4,  // circumflex
        '\u{030C}' => 5,  // caron
        '\u{030A}' => 6,  // ring
        '\u{0308}' => 7,  // diaeresis
        '\u{030B}' => 8,  // double acute
        '\u{0303}' => 9,  // tilde
        '\u{0307}' => 10, // dot above
        '\u{0327}' => 11, // cedilla
        '\u{0328}' => 12, // ogonek
        '\u{0304}' => 13, // macron
        _ => 20,
    }
}

/// Letters NFD leaves whole, folded to the Latin letters they sort with.
fn fold(lower: char) -> &'static str {
    match lower {
        'ø' => "o",
        'æ' => "ae",
        'œ' => "oe",
        'ß' => "ss",
        'ł' => "l",
        'đ' | 'ð' => "d",
        'þ' => "th",
        'ħ' => "h",
        'ı' => "i",
        _ => "",
    }
}

fn primary_of(lower: char) -> Primary {
    if let Some(digit) = lower.to_digit(10) {
        Primary::Digit(digit)
    } else if lower.is_alphabetic() {
        Primary::Letter(lower)
    } else {
        Primary::Symbol(lower)
    }
}

fn units(name: &str) -> Vec<Unit> {
    let mut units: Vec<Unit> = Vec::new();
    for c in name.nfd() {
        if is_combining_mark(c) {
            if let Some(last) = units.last_mut() {
                last.accents.push(accent_rank(c));
            }
            continue;
        }
        let upper = c.is_uppercase();
        let lower = c.to_lowercase().next().unwrap_or(c);
        match fold(lower) {
            "" => units.push(Unit {
                primary: primary_of(lower),
                accents: Vec::new(),
                upper,
            }),
            folded => units.extend(folded.chars().map(|base| Unit {
                primary: Primary::Letter(base),
                // Folded letters sort right after their plain base letters.
                accents: vec![u8::MAX],
                upper,
            })),
        }
    }
    units
}

pub fn compare_names(left: &str, right: &str) -> Ordering {
    let left = units(left);
    let right = units(right);

    let primary = left.iter().map(|u| u.primary).cmp(right.iter().map(|u| u.primary));
    let secondary = || {
        left.iter()
            .map(|u| &u.accents)
            .cmp(right.iter().map(|u| &u.accents))
    };
    let tertiary = || left.iter().map(|u| u.upper).cmp(right.iter().map(|u| u.upper));

    primary.then_with(secondary).then_with(tertiary)
}

/// Stable: products with equal names keep their relative order.
pub fn sort_by_name(products: &mut [Product]) {
    products.sort_by(|a, b| compare_names(&a.name, &b.name));
}
