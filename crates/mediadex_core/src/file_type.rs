//! Platform file type enumeration.

use mediadex_error::{DecodeError, DecodeErrorKind};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Class of file a platform handle points at.
///
/// Discriminants are the wire values carried in the first field of a
/// decoded handle.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    /// Thumbnail of another file
    #[display("thumbnail")]
    Thumbnail = 0,
    /// Chat profile photo
    #[display("chat_photo")]
    ChatPhoto = 1,
    /// Photo
    #[display("photo")]
    Photo = 2,
    /// Voice message
    #[display("voice")]
    Voice = 3,
    /// Video
    #[display("video")]
    Video = 4,
    /// Generic document
    #[display("document")]
    Document = 5,
    /// Encrypted chat file
    #[display("encrypted")]
    Encrypted = 6,
    /// Temporary file
    #[display("temp")]
    Temp = 7,
    /// Sticker
    #[display("sticker")]
    Sticker = 8,
    /// Audio track
    #[display("audio")]
    Audio = 9,
    /// GIF or silent video
    #[display("animation")]
    Animation = 10,
    /// Thumbnail of an encrypted file
    #[display("encrypted_thumbnail")]
    EncryptedThumbnail = 11,
    /// Chat wallpaper
    #[display("wallpaper")]
    Wallpaper = 12,
    /// Round video message
    #[display("video_note")]
    VideoNote = 13,
    /// Raw passport file
    #[display("secure_raw")]
    SecureRaw = 14,
    /// Passport file
    #[display("secure")]
    Secure = 15,
    /// Chat background
    #[display("background")]
    Background = 16,
    /// Document sent uncompressed
    #[display("document_as_file")]
    DocumentAsFile = 17,
}

impl FileType {
    /// Wire value of this file type.
    pub fn id(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for FileType {
    type Error = DecodeError;

    #[track_caller]
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        FileType::iter()
            .find(|file_type| file_type.id() == value)
            .ok_or_else(|| DecodeError::new(DecodeErrorKind::UnknownFileType(value)))
    }
}
