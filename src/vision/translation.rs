// Vision translation logic
// Author: kelexine (https://github.com/kelexine)

use super::models::AnalyzeImageRequest;
use super::prompt::TIMETABLE_PROMPT;
use crate::error::{RelayError, Result};
use crate::models::gemini::{Content, GenerateContentRequest, InlineData, Part};

/// Parse the raw body of an analyze-image request.
///
/// An empty body, a body that is not a JSON object, and an object without a
/// non-empty `image_data` string are all rejected as invalid requests.
pub fn parse_analyze_request(body: &[u8]) -> Result<AnalyzeImageRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(RelayError::InvalidRequest("empty request body".to_string()));
    }

    let request: AnalyzeImageRequest = serde_json::from_slice(body)
        .map_err(|e| RelayError::InvalidRequest(format!("JSON deserialization error: {}", e)))?;

    if request.image_data.is_empty() {
        return Err(RelayError::InvalidRequest("image_data is empty".to_string()));
    }

    Ok(request)
}

/// Build the Gemini payload: fixed prompt first, then the caller's image.
pub fn build_generate_request(request: &AnalyzeImageRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![
                Part::Text {
                    text: TIMETABLE_PROMPT.to_string(),
                },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: request.mime_type.clone(),
                        data: request.image_data.clone(),
                    },
                },
            ],
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vision::DEFAULT_MIME_TYPE;

    // Tiny 1x1 PNG (base64 encoded)
    const PNG_DATA: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg==";

    #[test]
    fn test_parse_with_mime_type() {
        let body = format!(r#"{{"image_data": "{}", "mime_type": "image/png"}}"#, PNG_DATA);
        let request = parse_analyze_request(body.as_bytes()).unwrap();
        assert_eq!(request.image_data, PNG_DATA);
        assert_eq!(request.mime_type, "image/png");
    }

    #[test]
    fn test_parse_defaults_mime_type() {
        let request = parse_analyze_request(br#"{"image_data": "abcd"}"#).unwrap();
        assert_eq!(request.mime_type, DEFAULT_MIME_TYPE);

        let request =
            parse_analyze_request(br#"{"image_data": "abcd", "mime_type": null}"#).unwrap();
        assert_eq!(request.mime_type, DEFAULT_MIME_TYPE);
    }

    #[test]
    fn test_parse_rejects_missing_image_data() {
        let bodies: [&[u8]; 10] = [
            b"",
            b"   ",
            b"{}",
            b"null",
            b"[]",
            b"not json",
            br#"{"mime_type": "image/png"}"#,
            br#"{"image_data": null}"#,
            br#"{"image_data": ""}"#,
            br#"{"image_data": 42}"#,
        ];
        for body in bodies {
            let result = parse_analyze_request(body);
            assert!(
                matches!(result, Err(RelayError::InvalidRequest(_))),
                "expected invalid request for {:?}",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn test_image_data_is_not_decoded() {
        // Anything non-empty is forwarded; the upstream decides what is an image
        let request = parse_analyze_request(br#"{"image_data": "not-valid-base64!!!"}"#).unwrap();
        let payload = build_generate_request(&request);
        match &payload.contents[0].parts[1] {
            Part::InlineData { inline_data } => assert_eq!(inline_data.data, "not-valid-base64!!!"),
            other => panic!("expected inline data, got {:?}", other),
        }
    }

    #[test]
    fn test_build_generate_request() {
        let request = AnalyzeImageRequest::new(PNG_DATA).with_mime_type("image/png");
        let payload = build_generate_request(&request);

        assert_eq!(payload.contents.len(), 1);
        let parts = &payload.contents[0].parts;
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].as_text(), Some(TIMETABLE_PROMPT));
        assert_eq!(
            parts[1],
            Part::InlineData {
                inline_data: InlineData {
                    mime_type: "image/png".to_string(),
                    data: PNG_DATA.to_string(),
                },
            }
        );
    }
}
