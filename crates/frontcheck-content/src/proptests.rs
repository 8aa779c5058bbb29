//! Property-based tests for extraction and validation.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::markdown::{extract_frontmatter, Frontmatter};
    use crate::validate::{validate_content, Tag};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_no_leading_delimiter_is_info(content in "\\PC*") {
            prop_assume!(!content.starts_with("---"));
            let v = validate_content("doc.md", &content);
            prop_assert!(v.is_valid());
            prop_assert_eq!(v.tag(), Tag::Info);
        }

        #[test]
        fn test_unclosed_block_is_warn(lines in prop::collection::vec("[a-z]{1,8}: [a-z0-9 ]{0,12}", 0..6)) {
            let content = format!("---\n{}", lines.join("\n"));
            let v = validate_content("doc.md", &content);
            prop_assert!(!v.is_valid());
            prop_assert_eq!(v.tag(), Tag::Warn);
        }

        #[test]
        fn test_simple_mapping_is_pass(
            keys in prop::collection::btree_set("[a-z]{1,8}", 1..6),
            body in "[a-zA-Z #\\n]{0,40}",
        ) {
            let yaml: String = keys.iter().map(|k| format!("{k}: value\n")).collect();
            let content = format!("---\n{yaml}---\n{body}");
            let v = validate_content("doc.md", &content);
            prop_assert_eq!(v.tag(), Tag::Pass);
        }

        #[test]
        fn test_block_yaml_is_prefix_of_content(content in "---\n[a-z:\\n -]{0,60}") {
            if let Frontmatter::Block { yaml, body } = extract_frontmatter(&content) {
                prop_assert!(content[4..].starts_with(yaml));
                prop_assert!(content.ends_with(body));
            }
        }
    }
}
