/// Splits a statement into whitespace-delimited fields
pub fn split_fields(statement: &str) -> Vec<&str> {
    statement.split_whitespace().collect()
}

/// Finds the first field equal to `keyword`, ignoring ASCII case
pub fn find_keyword(fields: &[&str], keyword: &str) -> Option<usize> {
    fields.iter().position(|f| f.eq_ignore_ascii_case(keyword))
}

/// Returns the leading identifier-like word after trimming whitespace
///
/// The word ends at the first character outside `[A-Za-z0-9_]`, so `select1`
/// is returned whole and never matches a keyword.
pub fn leading_keyword(statement: &str) -> &str {
    let trimmed = statement.trim_start();
    let end = trimmed
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(trimmed.len());
    &trimmed[..end]
}

/// Strips one pair of matching double quotes or backticks
pub fn strip_identifier_quotes(name: &str) -> &str {
    for quote in ['"', '`'] {
        if name.len() >= 2 && name.starts_with(quote) && name.ends_with(quote) {
            return &name[1..name.len() - 1];
        }
    }
    name
}

/// Cleans a table identifier taken from a statement field
///
/// `keys(a,b)` -> `keys`, `"1_keys";` -> `1_keys`
pub fn clean_table_identifier(field: &str) -> String {
    let name = match field.find('(') {
        Some(idx) => &field[..idx],
        None => field,
    };
    let name = name.trim_end_matches([';', ',']);
    strip_identifier_quotes(name).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_fields_tolerates_extra_whitespace() {
        let fields = split_fields("  select a,  b,\tc \n from keys ");
        assert_eq!(fields, vec!["select", "a,", "b,", "c", "from", "keys"]);
    }

    #[test]
    fn test_find_keyword() {
        let fields = split_fields("SELECT a FROM keys");
        assert_eq!(find_keyword(&fields, "from"), Some(2));
        assert_eq!(find_keyword(&fields, "where"), None);
    }

    #[test]
    fn test_leading_keyword() {
        assert_eq!(leading_keyword("  SELECT * FROM t"), "SELECT");
        assert_eq!(leading_keyword("select(1)"), "select");
        assert_eq!(leading_keyword(""), "");
        assert_eq!(leading_keyword("1 + 1"), "1");
        assert_eq!(leading_keyword("select1 from t"), "select1");
        assert_eq!(leading_keyword("select_x from t"), "select_x");
        assert_eq!(leading_keyword("delete\nfrom t"), "delete");
    }

    #[test]
    fn test_strip_identifier_quotes() {
        assert_eq!(strip_identifier_quotes("\"1_keys\""), "1_keys");
        assert_eq!(strip_identifier_quotes("`keys`"), "keys");
        assert_eq!(strip_identifier_quotes("\"keys"), "\"keys");
        assert_eq!(strip_identifier_quotes("\""), "\"");
        assert_eq!(strip_identifier_quotes("keys"), "keys");
    }

    #[test]
    fn test_clean_table_identifier() {
        assert_eq!(clean_table_identifier("keys(a,b,c)"), "keys");
        assert_eq!(clean_table_identifier("\"1_keys\"(id)"), "1_keys");
        assert_eq!(clean_table_identifier("\"1_keys\";"), "1_keys");
        assert_eq!(clean_table_identifier("keys,"), "keys");
        assert_eq!(clean_table_identifier("keys"), "keys");
    }
}
