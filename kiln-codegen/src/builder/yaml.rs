//! Scalar rendering for hand-assembled YAML.

/// Render `value` as a single-line YAML scalar that reads back as the same
/// string.
///
/// `serde_yaml` picks plain or quoted style. Values it would turn into a
/// block scalar (anything with a line break) are written as a double-quoted
/// JSON string instead, which YAML reads with the same escapes.
pub fn scalar(value: &str) -> eyre::Result<String> {
    let rendered = serde_yaml::to_string(value)?;
    let rendered = rendered.strip_suffix('\n').unwrap_or(&rendered);
    if rendered.contains('\n') || value.chars().any(char::is_control) {
        Ok(serde_json::to_string(value)?)
    } else {
        Ok(rendered.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reads_back(value: &str) -> serde_yaml::Value {
        serde_yaml::from_str(&format!("key: {}\n", scalar(value).unwrap()))
            .map(|mut doc: serde_yaml::Mapping| doc.remove("key").unwrap())
            .unwrap()
    }

    #[test]
    fn test_plain_scalars() {
        assert_eq!(scalar("main").unwrap(), "main");
        assert_eq!(scalar("ubuntu-latest").unwrap(), "ubuntu-latest");
        assert_eq!(scalar("registry.npmjs.org").unwrap(), "registry.npmjs.org");
    }

    #[test]
    fn test_ambiguous_values_stay_strings() {
        for value in ["", "true", "null", "1.0", "@acme/lib", "a: b", " padded", "say \"hi\""] {
            assert_eq!(reads_back(value), serde_yaml::Value::String(value.to_string()), "{value:?}");
        }
    }

    #[test]
    fn test_control_characters_are_escaped() {
        let rendered = scalar("github.com/acme/lib\nv2").unwrap();

        assert!(!rendered.contains('\n'));
        assert_eq!(
            reads_back("github.com/acme/lib\nv2"),
            serde_yaml::Value::String("github.com/acme/lib\nv2".to_string())
        );
        assert_eq!(
            reads_back("tab\there"),
            serde_yaml::Value::String("tab\there".to_string())
        );
    }
}
