//! Identifier and literal quoting for ClickHouse SQL.
//!
//! The simple variants assume an unqualified name and perform no splitting.
//! Already-quoted input (anything containing a backtick) is passed through;
//! this is not an injection guard for adversarial names.

/// Quote a table name without schema prefix.
pub fn quote_simple_table_name(name: &str) -> String {
    if name.contains('`') {
        name.to_string()
    } else {
        format!("`{}`", name)
    }
}

/// Quote a column name without table prefix. `*` is left as is.
pub fn quote_simple_column_name(name: &str) -> String {
    if name == "*" || name.contains('`') {
        name.to_string()
    } else {
        format!("`{}`", name)
    }
}

/// Quote a possibly schema-qualified table name, e.g. `db.users`.
///
/// Expressions and `{{table}}` placeholders are returned unchanged.
pub fn quote_table_name(name: &str) -> String {
    if name.contains('(') || name.contains("{{") {
        return name.to_string();
    }
    if !name.contains('.') {
        return quote_simple_table_name(name);
    }
    name.split('.')
        .map(quote_simple_table_name)
        .collect::<Vec<_>>()
        .join(".")
}

/// Quote a possibly table-qualified column name, e.g. `t.id`.
///
/// Expressions and `[[column]]`/`{{table}}` placeholders are returned unchanged.
pub fn quote_column_name(name: &str) -> String {
    if name.contains('(') || name.contains("[[") || name.contains("{{") {
        return name.to_string();
    }
    match name.rfind('.') {
        Some(pos) => format!(
            "{}.{}",
            quote_table_name(&name[..pos]),
            quote_simple_column_name(&name[pos + 1..])
        ),
        None => quote_simple_column_name(name),
    }
}

/// Quote a string as a ClickHouse string literal.
pub fn quote_value(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for ch in value.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            _ => quoted.push(ch),
        }
    }
    quoted.push('\'');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_simple_table_name() {
        assert_eq!(quote_simple_table_name("users"), "`users`");
        assert_eq!(quote_simple_table_name("us`ers"), "us`ers");
        assert_eq!(quote_simple_table_name("`users`"), "`users`");
    }

    #[test]
    fn test_quote_simple_column_name() {
        assert_eq!(quote_simple_column_name("*"), "*");
        assert_eq!(quote_simple_column_name("id"), "`id`");
        assert_eq!(quote_simple_column_name("`id`"), "`id`");
    }

    #[test]
    fn test_quote_table_name() {
        assert_eq!(quote_table_name("users"), "`users`");
        assert_eq!(quote_table_name("db.users"), "`db`.`users`");
        assert_eq!(quote_table_name("`db`.users"), "`db`.`users`");
        assert_eq!(quote_table_name("{{%users}}"), "{{%users}}");
        assert_eq!(quote_table_name("(SELECT 1)"), "(SELECT 1)");
    }

    #[test]
    fn test_quote_column_name() {
        assert_eq!(quote_column_name("id"), "`id`");
        assert_eq!(quote_column_name("t.id"), "`t`.`id`");
        assert_eq!(quote_column_name("db.t.id"), "`db`.`t`.`id`");
        assert_eq!(quote_column_name("t.*"), "`t`.*");
        assert_eq!(quote_column_name("count(*)"), "count(*)");
        assert_eq!(quote_column_name("[[id]]"), "[[id]]");
    }

    #[test]
    fn test_quote_value() {
        assert_eq!(quote_value("abc"), "'abc'");
        assert_eq!(quote_value("it's"), "'it\\'s'");
        assert_eq!(quote_value(r"a\b"), r"'a\\b'");
        assert_eq!(quote_value(""), "''");
    }
}
