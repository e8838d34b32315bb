use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SegmindGenerateResponse {
    #[serde(default)]
    pub images: Option<Vec<Option<String>>>,
}

impl SegmindGenerateResponse {
    pub fn into_first_image(self) -> Option<String> {
        self.images?
            .into_iter()
            .next()
            .flatten()
            .filter(|image| !image.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> SegmindGenerateResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn takes_the_first_image() {
        let res = parse(r#"{"images": ["abc123", "def456"]}"#);
        assert_eq!(res.into_first_image().as_deref(), Some("abc123"));
    }

    #[test]
    fn missing_or_empty_images_yield_nothing() {
        for body in [
            r#"{}"#,
            r#"{"images": null}"#,
            r#"{"images": []}"#,
            r#"{"images": [null]}"#,
            r#"{"images": [""]}"#,
            r#"{"status": "ok", "infer_time": 1.2}"#,
        ] {
            assert_eq!(parse(body).into_first_image(), None, "{body}");
        }
    }
}
