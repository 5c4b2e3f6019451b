//! # Identity Normalizer
//!
//! `normalize` produces the canonical comparison form of a name:
//! diacritics folded to their base letters, punctuation stripped except
//! hyphens that sit inside a token, whitespace collapsed, everything
//! uppercased. Deterministic, side-effect-free, and idempotent —
//! `normalize(normalize(x)) == normalize(x)` for every input.

/// Fold a common accented Latin character to its uppercase ASCII base.
///
/// Returns `None` for characters that need no folding. The table covers
/// the Latin-1 supplement plus the ligatures and stroked letters that
/// appear in sanctions-list transliterations; other scripts pass through
/// unchanged (uppercased) so non-Latin names still compare exactly.
fn fold_diacritic(c: char) -> Option<&'static str> {
    let folded = match c {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'Ā' | 'ā'
        | 'Ă' | 'ă' | 'Ą' | 'ą' => "A",
        'Ç' | 'ç' | 'Ć' | 'ć' | 'Č' | 'č' => "C",
        'Ď' | 'ď' | 'Đ' | 'đ' => "D",
        'È' | 'É' | 'Ê' | 'Ë' | 'è' | 'é' | 'ê' | 'ë' | 'Ē' | 'ē' | 'Ė' | 'ė' | 'Ę' | 'ę'
        | 'Ě' | 'ě' => "E",
        'Ğ' | 'ğ' | 'Ģ' | 'ģ' => "G",
        'Ì' | 'Í' | 'Î' | 'Ï' | 'ì' | 'í' | 'î' | 'ï' | 'İ' | 'ı' | 'Ī' | 'ī' | 'Į' | 'į' => "I",
        'Ķ' | 'ķ' => "K",
        'Ł' | 'ł' | 'Ļ' | 'ļ' | 'Ľ' | 'ľ' => "L",
        'Ñ' | 'ñ' | 'Ń' | 'ń' | 'Ņ' | 'ņ' | 'Ň' | 'ň' => "N",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'Ō' | 'ō'
        | 'Ő' | 'ő' => "O",
        'Ŕ' | 'ŕ' | 'Ř' | 'ř' => "R",
        'Ś' | 'ś' | 'Ş' | 'ş' | 'Š' | 'š' => "S",
        'Ţ' | 'ţ' | 'Ť' | 'ť' => "T",
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'ù' | 'ú' | 'û' | 'ü' | 'Ū' | 'ū' | 'Ů' | 'ů' | 'Ű' | 'ű'
        | 'Ų' | 'ų' => "U",
        'Ý' | 'ý' | 'ÿ' | 'Ÿ' => "Y",
        'Ź' | 'ź' | 'Ż' | 'ż' | 'Ž' | 'ž' => "Z",
        'Æ' | 'æ' => "AE",
        'Œ' | 'œ' => "OE",
        'ß' => "SS",
        'Þ' | 'þ' => "TH",
        'Ð' | 'ð' => "D",
        _ => return None,
    };
    Some(folded)
}

/// Canonicalize a raw name for comparison.
///
/// Steps, in order: fold diacritics to base letters, replace punctuation
/// with spaces (hyphens survive this pass), uppercase, collapse
/// whitespace, then drop hyphens that are not between two alphanumeric
/// characters of the same token.
pub fn normalize(raw: &str) -> String {
    let mut buf = String::with_capacity(raw.len());
    for c in raw.chars() {
        if let Some(folded) = fold_diacritic(c) {
            buf.push_str(folded);
        } else if c.is_alphanumeric() {
            // Full uppercase mappings can emit combining marks; keep only
            // the alphanumeric part so a second pass sees identical input.
            for upper in c.to_uppercase() {
                if upper.is_alphanumeric() {
                    buf.push(upper);
                }
            }
        } else if c == '-' {
            buf.push('-');
        } else {
            buf.push(' ');
        }
    }

    let tokens: Vec<String> = buf
        .split_whitespace()
        .filter_map(clean_token)
        .collect();
    tokens.join(" ")
}

/// Collapse repeated hyphens inside a token and strip leading/trailing
/// ones, so only internal hyphens survive. Returns `None` for tokens
/// that were nothing but hyphens.
fn clean_token(token: &str) -> Option<String> {
    let mut cleaned = String::with_capacity(token.len());
    let mut prev_hyphen = false;
    for c in token.chars() {
        if c == '-' {
            if prev_hyphen {
                continue;
            }
            prev_hyphen = true;
        } else {
            prev_hyphen = false;
        }
        cleaned.push(c);
    }
    let trimmed = cleaned.trim_matches('-');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
