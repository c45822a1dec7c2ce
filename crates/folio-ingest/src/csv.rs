//! CSV line splitting for published sheet exports.
//!
//! Sheets exports are simple enough that a line-at-a-time splitter is all the
//! ingestion needs: no multi-line cells are produced for the sheets we read,
//! and quoting is only used to protect commas.

/// Strip byte-order marks, replacement characters and carriage returns, then trim.
pub fn clean_text(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '\u{FEFF}' | '\u{FFFD}' | '\r'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Split one CSV line into cleaned fields.
///
/// A comma separates fields only when the rest of the line after it holds an
/// even number of `"` characters, i.e. when it is not inside a quoted field.
/// One wrapping quote is removed from each end of every field. Unbalanced
/// quoting never fails; the stray quotes stay in the field.
pub fn split_csv_line(line: &str) -> Vec<String> {
    let total_quotes = line.matches('"').count();
    let mut quotes_seen = 0;
    let mut fields = Vec::new();
    let mut start = 0;

    for (i, c) in line.char_indices() {
        match c {
            '"' => quotes_seen += 1,
            ',' if (total_quotes - quotes_seen) % 2 == 0 => {
                fields.push(clean_field(&line[start..i]));
                start = i + 1;
            }
            _ => {}
        }
    }
    fields.push(clean_field(&line[start..]));
    fields
}

fn clean_field(raw: &str) -> String {
    let field = raw.trim();
    let field = field.strip_prefix('"').unwrap_or(field);
    let field = field.strip_suffix('"').unwrap_or(field);
    clean_text(field)
}

/// Non-empty cleaned lines of a CSV body, with their 0-based line index.
pub(crate) fn lines(text: &str) -> impl Iterator<Item = (usize, String)> + '_ {
    text.split('\n')
        .enumerate()
        .map(|(i, line)| (i, clean_text(line)))
        .filter(|(_, line)| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_comma_not_split() {
        assert_eq!(split_csv_line(r#"a,"b,c",d"#), vec!["a", "b,c", "d"]);
    }

    #[test]
    fn test_plain_fields_trimmed() {
        assert_eq!(split_csv_line(" a , b ,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_fields_kept() {
        assert_eq!(split_csv_line("Demo,,x,"), vec!["Demo", "", "x", ""]);
        assert_eq!(split_csv_line(""), vec![""]);
    }

    #[test]
    fn test_bom_and_carriage_return_removed() {
        assert_eq!(split_csv_line("\u{FEFF}name,Ana\r"), vec!["name", "Ana"]);
        assert_eq!(split_csv_line("bio,ol\u{FFFD}a"), vec!["bio", "ola"]);
    }

    #[test]
    fn test_inner_quotes_kept() {
        // Only the wrapping quotes go; doubled quotes are left as exported.
        assert_eq!(
            split_csv_line(r#"quote,"He said ""hi""""#),
            vec!["quote", r#"He said ""hi"""#]
        );
    }

    #[test]
    fn test_unbalanced_quote_degrades() {
        // Odd quote count: commas before the stray quote look quoted.
        assert_eq!(split_csv_line(r#"a,"b,c"#), vec![r#"a,"b"#, "c"]);
    }

    #[test]
    fn test_multiple_quoted_fields() {
        assert_eq!(
            split_csv_line(r#""Dash, BI","Power BI, SQL",desc"#),
            vec!["Dash, BI", "Power BI, SQL", "desc"]
        );
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("\u{FEFF}  hello\r\n"), "hello");
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn test_lines_skip_blank_and_keep_index() {
        let got: Vec<_> = lines("a,1\r\n\r\n  \nb,2").collect();
        assert_eq!(got, vec![(0, "a,1".to_string()), (3, "b,2".to_string())]);
    }
}
