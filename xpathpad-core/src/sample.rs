//! Built-in sample document and query hints

/// Bookstore document to experiment with
pub const SAMPLE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>

<bookstore>

<book>
  <title lang="eng">Harry Potter</title>
  <price>29.99</price>
  <awesome/>
</book>

<book>
  <title lang="eng">Learning XML</title>
  <price>39.95</price>
  <awesome stats="off"/>
</book>

<novel>
  <title lang="fr">Learning French</title>
  <price>30.95</price>
</novel>

</bookstore>
"#;

/// Expressions worth trying against [`SAMPLE_XML`], with what they select
pub const SAMPLE_HINTS: &[(&str, &str)] = &[
    ("/bookstore/book", "get all books"),
    ("//book", "get all books"),
    ("//novel", "get all novels"),
    ("//@lang", "get all \"lang\" attributes"),
    ("//title/@lang", "get all title \"lang\" attributes"),
    ("//book//@lang", "get book ... \"lang\" attributes"),
    ("//title", "get all book titles"),
    ("//book/title", "get only book titles"),
];

/// Hints rendered as an aligned block of text
pub fn format_hints() -> String {
    let width = SAMPLE_HINTS.iter().map(|(xpath, _)| xpath.len()).max().unwrap_or(0);
    let mut output = String::from("Things to try:\n");
    for (xpath, description) in SAMPLE_HINTS {
        output.push_str(&format!("  {:width$}  {}\n", xpath, description, width = width));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints_list_every_expression() {
        let hints = format_hints();
        assert!(hints.starts_with("Things to try:\n"));
        for (xpath, _) in SAMPLE_HINTS {
            assert!(hints.contains(xpath));
        }
        assert_eq!(hints.lines().count(), SAMPLE_HINTS.len() + 1);
    }
}
