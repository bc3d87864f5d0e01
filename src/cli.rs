use clap::Parser;
use regex::Regex;
use std::path::PathBuf;

use crate::request::{CodecSettings, ConversionRequest, DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_TOOL};

#[derive(Parser, Debug)]
#[command(name = "mov2mp4")]
#[command(about = "Convert a MOV video to a web-friendly MP4 using ffmpeg")]
pub struct Args {
    #[arg(long, default_value = DEFAULT_INPUT, help = "Source video file")]
    pub input: PathBuf,
    #[arg(long, default_value = DEFAULT_OUTPUT, help = "Destination MP4 file")]
    pub output: PathBuf,
    #[arg(long, default_value = DEFAULT_TOOL, help = "Transcoding tool to run")]
    pub tool: String,
    #[arg(long, default_value = "libx264")]
    pub video_codec: String,
    #[arg(long, default_value = "medium")]
    pub preset: String,
    #[arg(long, default_value_t = 23, value_parser = clap::value_parser!(u8).range(0..=51))]
    pub crf: u8,
    #[arg(long, default_value = "aac")]
    pub audio_codec: String,
    #[arg(long, default_value = "128k", value_parser = parse_bitrate)]
    pub audio_bitrate: String,
    #[arg(long, help = "Don't show a spinner while converting")]
    pub no_progress: bool,
    #[arg(short, long, help = "Enable debug logging")]
    pub verbose: bool,
}

impl Args {
    pub fn request(&self) -> ConversionRequest {
        ConversionRequest::new(&self.input, &self.output).with_codec(CodecSettings {
            video_codec: self.video_codec.clone(),
            preset: self.preset.clone(),
            crf: self.crf,
            audio_codec: self.audio_codec.clone(),
            audio_bitrate: self.audio_bitrate.clone(),
        })
    }
}

fn parse_bitrate(value: &str) -> Result<String, String> {
    let bitrate_regex = Regex::new(r"^\d+[kKmM]?$").map_err(|e| e.to_string())?;
    if bitrate_regex.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(format!("invalid bitrate '{}', expected something like 128k", value))
    }
}
