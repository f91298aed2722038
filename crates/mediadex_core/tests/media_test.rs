//! Tests for media records, filters and file types.

use mediadex_core::{
    FileType, MediaBuilder, MediaFilter, SaveOutcome, SearchPattern, normalize_file_name,
};
use mediadex_error::{DecodeErrorKind, ValidationErrorKind};

fn word_pattern(word: &str) -> SearchPattern {
    SearchPattern::new(
        word,
        &format!(r"(?:\b|[.+\-_]){}(?:\b|[.+\-_])", word),
        format!(r"(\y|[.+\-_]){}(\y|[.+\-_])", word),
    )
    .unwrap()
}

#[test]
fn test_normalize_replaces_every_separator() {
    assert_eq!(normalize_file_name("a_b-c.d+e"), "a b c d e");
    assert_eq!(normalize_file_name("plain name"), "plain name");
}

#[test]
fn test_build_normalizes_name() {
    let media = MediaBuilder::default()
        .file_id("AgADBAAD")
        .file_name("Movie.2020.1080p")
        .file_size(100_i64)
        .build()
        .unwrap();

    assert_eq!(media.file_name(), "Movie 2020 1080p");
    assert_eq!(*media.file_size(), 100);
    assert!(media.file_ref().is_none());
}

#[test]
fn test_build_missing_size_is_validation_error() {
    let err = MediaBuilder::default()
        .file_id("AgADBAAD")
        .file_name("movie.mkv")
        .build()
        .unwrap_err();

    assert!(matches!(err.kind(), ValidationErrorKind::MissingField(f) if f == "file_size"));
}

#[test]
fn test_build_rejects_separator_only_name() {
    let err = MediaBuilder::default()
        .file_id("AgADBAAD")
        .file_name("_.-+")
        .file_size(1_i64)
        .build()
        .unwrap_err();

    assert_eq!(err.kind(), &ValidationErrorKind::EmptyFileName);
}

#[test]
fn test_build_rejects_negative_size() {
    let err = MediaBuilder::default()
        .file_id("AgADBAAD")
        .file_name("movie.mkv")
        .file_size(-5_i64)
        .build()
        .unwrap_err();

    assert_eq!(err.kind(), &ValidationErrorKind::NegativeFileSize(-5));
}

#[test]
fn test_build_drops_empty_caption() {
    let media = MediaBuilder::default()
        .file_id("AgADBAAD")
        .file_name("movie.mkv")
        .file_size(1_i64)
        .caption(Some(String::new()))
        .build()
        .unwrap();

    assert!(media.caption().is_none());
}

#[test]
fn test_filter_caption_only_when_enabled() {
    let media = MediaBuilder::default()
        .file_id("AgADBAAD")
        .file_name("IMG_0001.jpg")
        .file_size(1_i64)
        .caption(Some("<b>sunset</b> over the bay".to_string()))
        .build()
        .unwrap();

    let names_only = MediaFilter::new(word_pattern("sunset"), false, None);
    let with_caption = MediaFilter::new(word_pattern("sunset"), true, None);

    assert!(!names_only.matches(&media));
    assert!(with_caption.matches(&media));
}

#[test]
fn test_filter_file_type_restriction() {
    let media = MediaBuilder::default()
        .file_id("AgADBAAD")
        .file_name("my_cat.mp4")
        .file_size(1_i64)
        .file_type(Some("video".to_string()))
        .build()
        .unwrap();

    let videos = MediaFilter::new(word_pattern("cat"), false, Some("video".to_string()));
    let audio = MediaFilter::new(word_pattern("cat"), false, Some("audio".to_string()));

    assert!(videos.matches(&media));
    assert!(!audio.matches(&media));
}

#[test]
fn test_pattern_is_case_insensitive() {
    let pattern = word_pattern("matrix");
    assert!(pattern.is_match("The Matrix 1999"));
    assert_eq!(pattern.query(), "matrix");
}

#[test]
fn test_invalid_pattern_is_error() {
    assert!(SearchPattern::new("(", "(", "(").is_err());
}

#[test]
fn test_save_outcome_codes() {
    assert_eq!(SaveOutcome::Duplicate.as_tuple(), (false, 0));
    assert_eq!(SaveOutcome::Accepted.as_tuple(), (true, 1));
    assert_eq!(SaveOutcome::Invalid.as_tuple(), (false, 2));
}

#[test]
fn test_file_type_wire_values() {
    assert_eq!(FileType::try_from(5).unwrap(), FileType::Document);
    assert_eq!(FileType::try_from(17).unwrap(), FileType::DocumentAsFile);
    assert_eq!(FileType::Video.id(), 4);
    assert_eq!(FileType::Audio.to_string(), "audio");

    let err = FileType::try_from(42).unwrap_err();
    assert_eq!(err.kind(), &DecodeErrorKind::UnknownFileType(42));
}

#[test]
fn test_media_serializes_with_field_names() {
    let media = MediaBuilder::default()
        .file_id("AgADBAAD")
        .file_name("song.mp3")
        .file_size(3_i64)
        .mime_type(Some("audio/mpeg".to_string()))
        .build()
        .unwrap();

    let json = serde_json::to_value(&media).unwrap();
    assert_eq!(json["file_name"], "song mp3");
    assert_eq!(json["mime_type"], "audio/mpeg");
}
