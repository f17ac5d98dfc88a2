/// ASCII stand-ins for the Greek letters (and prime) of Siegbahn names.
#[rustfmt::skip]
const GREEK: [(char, char); 8] = [
    ('a', 'α'), ('b', 'β'), ('g', 'γ'), ('z', 'ζ'),
    ('n', 'η'), ('v', 'ν'), ('l', 'ℓ'), ('p', '′'),
];

pub const PRIME: char = '′';

/// Converts an ASCII Siegbahn name (`Ka1`, `Lg4p`, `Lg4'`) to its Unicode form.
pub fn to_unicode(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\'' => PRIME,
            _ => GREEK
                .iter()
                .find(|(ascii, _)| *ascii == c)
                .map_or(c, |&(_, greek)| greek),
        })
        .collect()
}

/// Converts a Unicode Siegbahn name to ASCII; the prime becomes an apostrophe.
pub fn to_ascii(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            PRIME => '\'',
            _ => GREEK
                .iter()
                .find(|(_, greek)| *greek == c)
                .map_or(c, |&(ascii, _)| ascii),
        })
        .collect()
}

pub fn is_greek(c: char) -> bool {
    c != PRIME && GREEK.iter().any(|&(_, greek)| greek == c)
}
