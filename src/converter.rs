use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use crate::error::{ConvertError, RunError};
use crate::fallback;
use crate::request::{ConversionRequest, DEFAULT_TOOL};
use crate::runner::{CommandRunner, SystemRunner};

pub struct Converter<R = SystemRunner> {
    runner: R,
    tool: String,
    request: ConversionRequest,
    show_progress: bool,
}

impl Converter<SystemRunner> {
    pub fn new(request: ConversionRequest) -> Self {
        Self::with_runner(request, SystemRunner)
    }
}

impl<R: CommandRunner> Converter<R> {
    pub fn with_runner(request: ConversionRequest, runner: R) -> Self {
        Converter {
            runner,
            tool: DEFAULT_TOOL.to_string(),
            request,
            show_progress: false,
        }
    }

    pub fn tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn request(&self) -> &ConversionRequest {
        &self.request
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    fn spinner(&self) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] Converting {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(self.request.input_path.display().to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Runs the conversion and returns the output path on success.
    ///
    /// The input must exist; otherwise the tool is never started.
    pub async fn try_convert(&self) -> Result<PathBuf, ConvertError> {
        let input = &self.request.input_path;
        if !input.exists() {
            return Err(ConvertError::MissingInput {
                path: input.clone(),
            });
        }

        let args = self.request.to_args();
        info!(
            "Converting {} -> {}",
            input.display(),
            self.request.output_path.display()
        );
        debug!(
            "Running {} {}",
            self.tool,
            args.iter()
                .map(|arg| arg.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let pb = self.spinner();
        let result = self.runner.run(&self.tool, &args).await;
        pb.finish_and_clear();

        let output = match result {
            Ok(output) => output,
            Err(RunError::NotFound(tool)) => return Err(ConvertError::ToolMissing { tool }),
            Err(RunError::Io(e)) => return Err(ConvertError::Unexpected(e)),
        };

        if output.success() {
            Ok(self.request.output_path.clone())
        } else {
            Err(ConvertError::ToolFailed {
                tool: self.tool.clone(),
                code: output.code,
                stderr: output.stderr,
            })
        }
    }

    /// Runs the conversion, writes status lines to `out` and reports success.
    pub async fn convert<W: Write>(&self, out: &mut W) -> bool {
        let result = self.try_convert().await;

        match &result {
            Ok(path) => info!("Wrote {}", path.display()),
            Err(e) => debug!("Conversion failed: {}", e.kind()),
        }

        if let Err(e) = self.report(&result, out) {
            warn!("Failed to write status: {}", e);
        }

        result.is_ok()
    }

    fn report<W: Write>(&self, result: &Result<PathBuf, ConvertError>, out: &mut W) -> io::Result<()> {
        match result {
            Ok(path) => writeln!(out, "Successfully converted to {}", path.display()),
            Err(ConvertError::MissingInput { path }) => {
                writeln!(out, "Error: {} not found!", path.display())
            }
            Err(ConvertError::ToolFailed { stderr, .. }) => writeln!(out, "FFmpeg error: {}", stderr),
            Err(ConvertError::ToolMissing { .. }) => self.report_tool_missing(out),
            Err(ConvertError::Unexpected(e)) => writeln!(out, "Error: {}", e),
        }
    }

    fn report_tool_missing<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let input = &self.request.input_path;
        let output = &self.request.output_path;

        writeln!(out, "FFmpeg not found. Please install FFmpeg or use an online converter.")?;
        writeln!(out, "\nAlternative: Use an online converter like:")?;
        for (i, service) in fallback::services_for(input, output).iter().enumerate() {
            writeln!(out, "{}. {} ({})", i + 1, service.name, service.url)?;
        }

        let format = output
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("mp4")
            .to_uppercase();
        writeln!(
            out,
            "\nConvert {} to {} and save as {}",
            input.display(),
            format,
            output.display()
        )
    }
}
