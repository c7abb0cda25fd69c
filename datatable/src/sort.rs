//! Sort comparators and view derivation.
//!
//! Comparators are always written ascending; a descending sort reverses
//! the ascending result afterwards, so stability is preserved identically
//! between directions modulo full reversal.

use std::cmp::Ordering;

use crate::column::{SortDir, SortType};
use crate::config::Row;

/// Derive a sorted view over `rows` as a permutation of indices.
///
/// The comparison value for each row is the cell content under `column`,
/// or the empty string when the row has no such cell. Sorting always
/// starts from dataset order, never from a previously sorted view.
pub fn sort_rows(rows: &[Row], column: &str, sort_type: SortType, dir: SortDir) -> Vec<usize> {
    let mut keyed: Vec<(usize, &str)> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let content = row.get(column).map(|c| c.content.as_str()).unwrap_or("");
            (index, content)
        })
        .collect();

    match sort_type {
        SortType::String => keyed.sort_by(|a, b| natural_cmp(a.1, b.1)),
        SortType::Number => keyed.sort_by(|a, b| numeric_cmp(a.1, b.1)),
    }

    if dir == SortDir::Desc {
        keyed.reverse();
    }

    keyed.into_iter().map(|(index, _)| index).collect()
}

/// Naturalized comparison (ascending).
///
/// Values with a leading integer compare numerically. When exactly one
/// value is numeric, the non-numeric one sorts first. Two non-numeric
/// values compare by their lowercased alphabetic form (letters plus
/// `.`, `/`, `\`), tie-broken by their embedded digit runs as numbers.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    match (leading_int(a), leading_int(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        // Alphanumeric-first: the numeric value sorts after.
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => {
            let a_alpha = alpha_key(a);
            let b_alpha = alpha_key(b);
            if a_alpha == b_alpha {
                digit_run(a).cmp(&digit_run(b))
            } else {
                a_alpha.cmp(&b_alpha)
            }
        }
    }
}

/// Strict numeric comparison (ascending). Thousands-separator commas are
/// stripped before parsing. Ordering of non-numeric input is undefined
/// but total: unparseable values become NaN, which `total_cmp` places
/// after every number, so the sort always completes.
pub fn numeric_cmp(a: &str, b: &str) -> Ordering {
    numeric_value(a).total_cmp(&numeric_value(b))
}

/// Leading-integer parse: optional sign followed by digits, ignoring
/// leading whitespace. `"10 items"` is 10, `"item10"` is nothing.
fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse::<i64>().ok().map(|n| sign * n)
    }
}

fn alpha_key(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphabetic() || matches!(c, '.' | '/' | '\\'))
        .collect::<String>()
        .to_lowercase()
}

fn digit_run(s: &str) -> Option<i64> {
    let digits: String = s.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

fn numeric_value(s: &str) -> f64 {
    s.replace(',', "").trim().parse().unwrap_or(f64::NAN)
}
