//! Wire types for the question-answering endpoint and the answer they map to

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// Response body returned by the question-answering endpoint.
///
/// Only the fields the UI reads are modelled; anything else in the body is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    pub output: ResponseOutput,
    #[serde(default)]
    pub session_id: Option<String>,
    pub citations: Vec<WireCitation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseOutput {
    pub text: String,
}

/// One citation as sent by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireCitation {
    pub generated_response_part: GeneratedResponsePart,
    pub retrieved_references: Vec<RetrievedReference>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedResponsePart {
    pub text_response_part: TextResponsePart,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextResponsePart {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievedReference {
    pub location: ReferenceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceLocation {
    pub s3_location: S3Location,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Location {
    pub uri: String,
}

/// A quoted passage and the document it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub text: String,
    pub uri: String,
}

impl Citation {
    pub fn new(text: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            uri: uri.into(),
        }
    }

    /// Final path segment of the source URI.
    ///
    /// A URI ending in `/` yields an empty name; a URI without any `/` is returned whole.
    pub fn file_name(&self) -> &str {
        self.uri.rsplit('/').next().unwrap_or(&self.uri)
    }
}

impl TryFrom<WireCitation> for Citation {
    type Error = CoreError;

    fn try_from(citation: WireCitation) -> CoreResult<Self> {
        let text = citation.generated_response_part.text_response_part.text;
        // Only the first retrieved reference is shown.
        let reference = citation
            .retrieved_references
            .into_iter()
            .next()
            .ok_or_else(|| {
                CoreError::malformed_response(format!(
                    "citation {text:?} has no retrieved references"
                ))
            })?;

        Ok(Self {
            text,
            uri: reference.location.s3_location.uri,
        })
    }
}

/// Everything a successful call contributes to the chat state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Answer {
    pub text: String,
    pub session_id: String,
    pub citations: Vec<Citation>,
}

impl Answer {
    /// Parse a raw response body
    pub fn from_json(body: &str) -> CoreResult<Self> {
        let response: QueryResponse = serde_json::from_str(body)?;
        Self::try_from(response)
    }
}

impl TryFrom<QueryResponse> for Answer {
    type Error = CoreError;

    fn try_from(response: QueryResponse) -> CoreResult<Self> {
        let citations = response
            .citations
            .into_iter()
            .map(Citation::try_from)
            .collect::<CoreResult<Vec<_>>>()?;

        Ok(Self {
            text: response.output.text,
            session_id: response.session_id.unwrap_or_default(),
            citations,
        })
    }
}
