use std::collections::HashMap;

use super::file_properties::FileProperties;

#[derive(Debug, Default)]
pub struct FormData {
    pub files: Vec<FileProperties>,
    pub fields: HashMap<String, String>,
}

impl FormData {
    pub fn take_file(&mut self, field_name: &str) -> Option<FileProperties> {
        if self.files.is_empty() {
            return None;
        }

        let index = self
            .files
            .iter()
            .position(|f| f.field_name == field_name)
            .unwrap_or(0);

        Some(self.files.remove(index))
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|v| v.as_str())
    }
}
