use finder_core::{FinderError, Part, Result};

pub fn core_parts_to_a2a(parts: &[Part]) -> Vec<crate::a2a::Part> {
    parts
        .iter()
        .map(|part| match part {
            Part::Text { text } => crate::a2a::Part::text(text.clone()),
            Part::Data { data } => crate::a2a::Part::data(data.clone()),
        })
        .collect()
}

pub fn a2a_parts_to_core(parts: &[crate::a2a::Part]) -> Result<Vec<Part>> {
    parts
        .iter()
        .map(|part| match part {
            crate::a2a::Part::Text { text, .. } => Ok(Part::Text { text: text.clone() }),
            crate::a2a::Part::Data { data, .. } => Ok(Part::Data { data: data.clone() }),
            crate::a2a::Part::File { file, .. } => Err(FinderError::Agent(format!(
                "File parts are not supported ({})",
                file.name.as_deref().or(file.mime_type.as_deref()).unwrap_or("unnamed file")
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::a2a::FileContent;
    use serde_json::{Map, json};

    #[test]
    fn test_text_and_data_conversion() {
        let mut data = Map::new();
        data.insert("location".to_string(), json!("NY"));
        let core = vec![Part::Text { text: "Hello".to_string() }, Part::Data { data }];

        let a2a = core_parts_to_a2a(&core);
        assert_eq!(a2a.len(), 2);

        let back = a2a_parts_to_core(&a2a).unwrap();
        assert_eq!(back, core);
    }

    #[test]
    fn test_file_part_rejected() {
        let parts = vec![crate::a2a::Part::File {
            file: FileContent {
                name: Some("menu.pdf".to_string()),
                mime_type: None,
                bytes: None,
                uri: Some("https://example.com/menu.pdf".to_string()),
            },
            metadata: None,
        }];
        let err = a2a_parts_to_core(&parts).unwrap_err();
        assert!(err.to_string().contains("menu.pdf"));
    }
}
