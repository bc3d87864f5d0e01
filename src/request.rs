use std::ffi::OsString;
use std::path::PathBuf;

pub const DEFAULT_TOOL: &str = "ffmpeg";
pub const DEFAULT_INPUT: &str = "videos/IMG_0-HBG-Pour.MOV";
pub const DEFAULT_OUTPUT: &str = "videos/IMG_0-HBG-Pour.mp4";

/// Encoder settings passed through to ffmpeg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecSettings {
    pub video_codec: String,
    pub preset: String,
    /// Constant rate factor, 0 (lossless) to 51.
    pub crf: u8,
    pub audio_codec: String,
    pub audio_bitrate: String,
}

impl Default for CodecSettings {
    fn default() -> Self {
        Self {
            video_codec: "libx264".to_string(),
            preset: "medium".to_string(),
            crf: 23,
            audio_codec: "aac".to_string(),
            audio_bitrate: "128k".to_string(),
        }
    }
}

/// A single conversion: where to read, where to write and how to encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub codec: CodecSettings,
}

impl Default for ConversionRequest {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            codec: CodecSettings::default(),
        }
    }
}

impl ConversionRequest {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            codec: CodecSettings::default(),
        }
    }

    pub fn with_codec(mut self, codec: CodecSettings) -> Self {
        self.codec = codec;
        self
    }

    /// Arguments for the transcoding tool, in the order ffmpeg expects them.
    ///
    /// `-movflags +faststart` moves the moov atom to the front of the file so
    /// browsers can start playback before the download finishes. Paths are
    /// passed through as-is, so non-UTF-8 names reach the tool unchanged.
    pub fn to_args(&self) -> Vec<OsString> {
        vec![
            "-i".into(),
            self.input_path.clone().into_os_string(),
            "-c:v".into(),
            self.codec.video_codec.clone().into(),
            "-preset".into(),
            self.codec.preset.clone().into(),
            "-crf".into(),
            self.codec.crf.to_string().into(),
            "-c:a".into(),
            self.codec.audio_codec.clone().into(),
            "-b:a".into(),
            self.codec.audio_bitrate.clone().into(),
            "-movflags".into(),
            "+faststart".into(),
            "-y".into(),
            self.output_path.clone().into_os_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_matches_original_invocation() {
        let args = ConversionRequest::default().to_args();
        assert_eq!(
            args,
            [
                "-i",
                "videos/IMG_0-HBG-Pour.MOV",
                "-c:v",
                "libx264",
                "-preset",
                "medium",
                "-crf",
                "23",
                "-c:a",
                "aac",
                "-b:a",
                "128k",
                "-movflags",
                "+faststart",
                "-y",
                "videos/IMG_0-HBG-Pour.mp4",
            ]
        );
    }

    #[test]
    fn codec_overrides_land_in_args() {
        let request = ConversionRequest::new("in.mkv", "out.mp4").with_codec(CodecSettings {
            video_codec: "libx265".to_string(),
            preset: "slow".to_string(),
            crf: 18,
            audio_codec: "libopus".to_string(),
            audio_bitrate: "96k".to_string(),
        });
        let args = request.to_args();

        assert_eq!(args[1], "in.mkv");
        assert_eq!(args[3], "libx265");
        assert_eq!(args[5], "slow");
        assert_eq!(args[7], "18");
        assert_eq!(args[9], "libopus");
        assert_eq!(args[11], "96k");
        assert_eq!(args[15], "out.mp4");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_paths_are_passed_unchanged() {
        use std::os::unix::ffi::OsStrExt;

        let input = std::ffi::OsStr::from_bytes(b"videos/clip\xff.MOV");
        let output = std::ffi::OsStr::from_bytes(b"videos/clip\xfe.mp4");
        let args = ConversionRequest::new(input, output).to_args();

        assert_eq!(args[1].as_bytes(), input.as_bytes());
        assert_eq!(args[15].as_bytes(), output.as_bytes());
    }
}
