//! Media record types.

use mediadex_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// A new file as contributed by the chat layer, before identifier derivation.
///
/// `file_id` is the opaque platform handle. `caption` is expected to be the
/// rendered markup of the source caption, if it had one.
///
/// # Examples
///
/// ```
/// use mediadex_core::IncomingMedia;
///
/// let incoming = IncomingMedia {
///     file_id: "BQACAgQAAxkBAAIB".to_string(),
///     file_name: Some("The_Matrix.1999.mkv".to_string()),
///     file_size: Some(1_024),
///     ..Default::default()
/// };
/// assert!(incoming.caption.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IncomingMedia {
    /// Opaque platform file handle
    pub file_id: String,
    /// File name as sent by the platform
    #[serde(default)]
    pub file_name: Option<String>,
    /// Size in bytes
    #[serde(default)]
    pub file_size: Option<i64>,
    /// Classification such as "document", "video" or "audio"
    #[serde(default)]
    pub file_type: Option<String>,
    /// MIME type
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Rendered caption markup
    #[serde(default)]
    pub caption: Option<String>,
}

/// One indexed file, as stored in a shard.
///
/// Records are built through [`MediaBuilder`], whose `build` normalises the
/// file name and rejects records missing required fields.
///
/// # Examples
///
/// ```
/// use mediadex_core::MediaBuilder;
///
/// let media = MediaBuilder::default()
///     .file_id("AgADBAAD")
///     .file_name("my_cat.mp4")
///     .file_size(2_048_i64)
///     .build()
///     .unwrap();
///
/// assert_eq!(media.file_name(), "my cat mp4");
/// assert!(media.caption().is_none());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), build_fn(private, name = "build_unchecked"))]
pub struct Media {
    /// Compact primary key derived from the platform handle
    file_id: String,
    /// Encoded file reference token
    #[builder(default)]
    file_ref: Option<String>,
    /// Normalised file name
    file_name: String,
    /// Size in bytes
    file_size: i64,
    /// Classification such as "document", "video" or "audio"
    #[builder(default)]
    file_type: Option<String>,
    /// MIME type
    #[builder(default)]
    mime_type: Option<String>,
    /// Rendered caption markup
    #[builder(default)]
    caption: Option<String>,
}

impl MediaBuilder {
    /// Build a validated media record.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `file_id`, `file_name` or `file_size`
    /// is missing, if the name is blank after normalisation, or if the size
    /// is negative.
    #[track_caller]
    pub fn build(&self) -> Result<Media, ValidationError> {
        let mut media = self.build_unchecked().map_err(|e| match e {
            MediaBuilderError::UninitializedField(field) => {
                ValidationError::new(ValidationErrorKind::MissingField(field.to_string()))
            }
            other => ValidationError::new(ValidationErrorKind::MissingField(other.to_string())),
        })?;

        if media.file_id.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::MissingField(
                "file_id".to_string(),
            )));
        }

        media.file_name = normalize_file_name(&media.file_name);
        if media.file_name.trim().is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyFileName));
        }

        if media.file_size < 0 {
            return Err(ValidationError::new(
                ValidationErrorKind::NegativeFileSize(media.file_size),
            ));
        }

        if media.caption.as_deref().is_some_and(str::is_empty) {
            media.caption = None;
        }

        Ok(media)
    }
}

/// Replace the separator characters `_ - . +` with spaces.
///
/// Stored names use spaces where the incoming name had separators, so text
/// search sees word boundaries.
///
/// # Examples
///
/// ```
/// use mediadex_core::normalize_file_name;
///
/// assert_eq!(normalize_file_name("The.Matrix-1999+HD_x264"), "The Matrix 1999 HD x264");
/// ```
pub fn normalize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '_' | '-' | '.' | '+' => ' ',
            other => other,
        })
        .collect()
}
