use super::greek::PRIME;

fn latex_greek(c: char) -> Option<&'static str> {
    match c {
        'α' => Some(r"\alpha"),
        'β' => Some(r"\beta"),
        'γ' => Some(r"\gamma"),
        'ζ' => Some(r"\zeta"),
        'η' => Some(r"\eta"),
        'ν' => Some(r"\nu"),
        'ℓ' => Some("l"),
        _ => None,
    }
}

fn html_entity(c: char) -> Option<&'static str> {
    match c {
        'α' => Some("&alpha;"),
        'β' => Some("&beta;"),
        'γ' => Some("&gamma;"),
        'ζ' => Some("&zeta;"),
        'η' => Some("&eta;"),
        'ν' => Some("&nu;"),
        'ℓ' => Some("&ell;"),
        PRIME => Some("&prime;"),
        '–' => Some("&ndash;"),
        _ => None,
    }
}

enum Piece {
    Text(char),
    Math(String),
}

fn join_pieces(pieces: Vec<Piece>) -> String {
    let mut out = String::new();
    let mut in_math = false;
    for piece in pieces {
        match piece {
            Piece::Text(c) => {
                if in_math {
                    out.push('$');
                    in_math = false;
                }
                out.push(c);
            }
            Piece::Math(math) => {
                if !in_math {
                    out.push('$');
                    in_math = true;
                }
                out.push_str(&math);
            }
        }
    }
    if in_math {
        out.push('$');
    }
    out
}

enum Segment {
    Char(char),
    Digits(String),
}

/// Splits `text` into single characters and maximal runs of ASCII digits.
fn segments(text: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    for c in text.chars() {
        if !c.is_ascii_digit() {
            out.push(Segment::Char(c));
            continue;
        }
        if let Some(Segment::Digits(digits)) = out.last_mut() {
            digits.push(c);
            continue;
        }
        out.push(Segment::Digits(c.to_string()));
    }
    out
}

/// LaTeX form of a Unicode Siegbahn name: Greek letters and digit runs go into
/// a single math group, e.g. `Kα1` becomes `K$\alpha_{1}$`.
pub fn siegbahn_to_latex(text: &str) -> String {
    let pieces = segments(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Digits(digits) => Piece::Math(format!("_{{{digits}}}")),
            Segment::Char(PRIME) => Piece::Math(r"^{\prime}".to_string()),
            Segment::Char(c) => match latex_greek(c) {
                Some(command) => Piece::Math(command.to_string()),
                None => Piece::Text(c),
            },
        })
        .collect();
    join_pieces(pieces)
}

/// LaTeX form of an IUPAC label: subshell numbers and parenthesised ranges become
/// subscripts, e.g. `K-L3` becomes `K-L$_{3}$` and `K-L(2,3)` becomes `K-L$_{2,3}$`.
pub fn iupac_to_latex(text: &str) -> String {
    let mut out = String::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '(' {
            let inner: String = chars.by_ref().take_while(|&c| c != ')').collect();
            out.push_str(&format!("$_{{{inner}}}$"));
        } else if c.is_ascii_digit() {
            let mut digits = String::from(c);
            while let Some(&next) = chars.peek() {
                if !next.is_ascii_digit() {
                    break;
                }
                digits.push(next);
                chars.next();
            }
            out.push_str(&format!("$_{{{digits}}}$"));
        } else {
            out.push(c);
        }
    }
    out.replace("$$", "")
}

/// HTML form: digit runs become `<sub>` elements and Greek letters named entities.
pub fn to_html(text: &str) -> String {
    segments(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Digits(digits) => format!("<sub>{digits}</sub>"),
            Segment::Char(c) => html_entity(c).map_or_else(|| c.to_string(), str::to_string),
        })
        .collect()
}
