//! Product image bytes and their base64 boundary encoding.
//!
//! Images are stored as raw bytes and only ever turned into base64 text when
//! they cross the HTTP boundary. Decoding tolerates embedded whitespace so
//! line-wrapped base64 (76-column MIME style) is accepted.

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error returned when an image payload is not valid base64.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid base64 image payload: {0}")]
pub struct ImageDecodeError(String);

/// Raw image bytes attached to a product.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ProductImage(Vec<u8>);

impl ProductImage {
    /// Wrap raw image bytes.
    #[must_use]
    pub const fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Decode a base64 payload (standard alphabet, padded).
    ///
    /// # Errors
    ///
    /// Returns `ImageDecodeError` if the text is not valid base64.
    pub fn from_base64(encoded: &str) -> Result<Self, ImageDecodeError> {
        let compact: String = encoded.split_ascii_whitespace().collect();
        STANDARD
            .decode(compact)
            .map(Self)
            .map_err(|e| ImageDecodeError(e.to_string()))
    }

    /// Encode the bytes as base64 text for transport.
    #[must_use]
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }

    /// Borrow the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the image, returning the raw bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Size of the image in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the image holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for ProductImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ProductImage")
            .field(&format_args!("{} bytes", self.0.len()))
            .finish()
    }
}

impl Serialize for ProductImage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for ProductImage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        Self::from_base64(&encoded).map_err(serde::de::Error::custom)
    }
}

/// An image as supplied on a create or update request.
///
/// A malformed payload is not a request failure: the store logs it and
/// carries on as if no image had been sent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageUpload {
    /// No image, or an empty string.
    #[default]
    Absent,
    /// A payload that decoded cleanly.
    Decoded(ProductImage),
    /// A payload that failed to decode.
    Malformed(ImageDecodeError),
}

impl ImageUpload {
    /// Interpret an optional base64 field from a request body.
    #[must_use]
    pub fn from_field(field: Option<&str>) -> Self {
        match field.map(str::trim) {
            None | Some("") => Self::Absent,
            Some(encoded) => match ProductImage::from_base64(encoded) {
                Ok(image) => Self::Decoded(image),
                Err(err) => Self::Malformed(err),
            },
        }
    }

    /// Bytes to persist, if any.
    #[must_use]
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Decoded(image) => Some(image.as_bytes()),
            Self::Absent | Self::Malformed(_) => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_arbitrary_bytes_survive_base64() {
        let bytes: Vec<u8> = (0..=255u8).rev().chain([0, 0, 255]).collect();
        let image = ProductImage::from_bytes(bytes.clone());
        let decoded = ProductImage::from_base64(&image.to_base64()).unwrap();
        assert_eq!(decoded.into_bytes(), bytes);
    }

    #[test]
    fn test_wrapped_base64_is_accepted() {
        let image = ProductImage::from_base64("aGVs\nbG8g\r\nd29y bGQ=").unwrap();
        assert_eq!(image.as_bytes(), b"hello world");
    }

    #[test]
    fn test_image_serializes_as_base64_string() {
        let image = ProductImage::from_bytes(b"png".to_vec());
        assert_eq!(serde_json::to_string(&image).unwrap(), "\"cG5n\"");
    }

    #[test]
    fn test_upload_from_field() {
        assert_eq!(ImageUpload::from_field(None), ImageUpload::Absent);
        assert_eq!(ImageUpload::from_field(Some("   ")), ImageUpload::Absent);
        assert_eq!(
            ImageUpload::from_field(Some("cG5n")).bytes(),
            Some(b"png".as_slice())
        );

        let malformed = ImageUpload::from_field(Some("not base64!!"));
        assert!(matches!(malformed, ImageUpload::Malformed(_)));
        assert_eq!(malformed.bytes(), None);
    }

    #[test]
    fn test_debug_hides_bytes() {
        let image = ProductImage::from_bytes(vec![1, 2, 3]);
        assert_eq!(format!("{image:?}"), "ProductImage(3 bytes)");
    }
}
