use serde_yaml::{Mapping, Value};

use super::model::{RadarItem, RadarSnapshot};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid YAML")]
    Yaml(#[from] serde_yaml::Error),
    #[error("expected a mapping at the top level of the radar data")]
    NotAMapping,
}

/// Parses the radar data file, tolerating missing or wrongly typed fields.
///
/// Returns the snapshot together with the number of `Items` entries that were
/// skipped because they were not mappings.
pub(super) fn parse_radar_yaml(raw: &str) -> Result<(RadarSnapshot, usize), ParseError> {
    let document: Value = serde_yaml::from_str(raw)?;
    let root = match document {
        Value::Mapping(mapping) => mapping,
        Value::Null => Mapping::new(),
        _ => return Err(ParseError::NotAMapping),
    };

    let last_modified = string_field(&root, "LastModified");

    let mut skipped = 0usize;
    let mut items = Vec::new();
    if let Some(Value::Sequence(entries)) = root.get("Items") {
        for entry in entries {
            match entry {
                Value::Mapping(fields) => items.push(parse_item(fields)),
                _ => skipped += 1,
            }
        }
    }

    Ok((
        RadarSnapshot {
            last_modified,
            items,
        },
        skipped,
    ))
}

fn parse_item(fields: &Mapping) -> RadarItem {
    RadarItem {
        label: string_field(fields, "Label"),
        quadrant: string_field(fields, "Quadrant"),
        ring: string_field(fields, "Ring"),
        moved: fields.get("Moved").and_then(Value::as_bool).unwrap_or(false),
        description: string_field(fields, "Description"),
        owners: string_field(fields, "Owners"),
    }
}

fn string_field(fields: &Mapping, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_all_fields() {
        let raw = r#"
LastModified: "2024-05-01"
Items:
  - Label: Rust
    Quadrant: Languages & Frameworks
    Ring: Adopted
    Moved: true
    Description: Systems language
    Owners: core-team
"#;
        let (snapshot, skipped) = parse_radar_yaml(raw).unwrap();
        assert_eq!(skipped, 0);
        assert_eq!(snapshot.last_modified, "2024-05-01");
        assert_eq!(
            snapshot.items,
            vec![RadarItem {
                label: "Rust".to_owned(),
                quadrant: "Languages & Frameworks".to_owned(),
                ring: "Adopted".to_owned(),
                moved: true,
                description: "Systems language".to_owned(),
                owners: "core-team".to_owned(),
            }]
        );
    }

    #[test]
    fn wrongly_typed_fields_fall_back_to_defaults() {
        let raw = r#"
LastModified: 20240501
Items:
  - Label: Helm
    Quadrant: Tools
    Ring: In Discovery
    Moved: "yes"
    Owners: [a, b]
  - just a string
  - 42
"#;
        let (snapshot, skipped) = parse_radar_yaml(raw).unwrap();
        assert_eq!(skipped, 2);
        assert_eq!(snapshot.last_modified, "");
        assert_eq!(snapshot.items.len(), 1);
        assert!(!snapshot.items[0].moved);
        assert_eq!(snapshot.items[0].owners, "");
        assert_eq!(snapshot.items[0].ring, "In Discovery");
    }

    #[test]
    fn missing_items_is_an_empty_snapshot() {
        let (snapshot, skipped) = parse_radar_yaml("LastModified: yesterday\n").unwrap();
        assert_eq!(skipped, 0);
        assert!(snapshot.items.is_empty());

        let (snapshot, _) = parse_radar_yaml("").unwrap();
        assert_eq!(snapshot, RadarSnapshot::default());
    }

    #[test]
    fn rejects_non_mapping_documents() {
        assert!(matches!(
            parse_radar_yaml("- a\n- b\n"),
            Err(ParseError::NotAMapping)
        ));
        assert!(matches!(
            parse_radar_yaml("Items: [unclosed"),
            Err(ParseError::Yaml(_))
        ));
    }
}
