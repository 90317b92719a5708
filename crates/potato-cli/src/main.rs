//! `potato`: compile a presentation source and write the result.

use anyhow::Context;
use clap::{Parser as ClapParser, ValueEnum};
use potato_core::error::ParserError;
use potato_core::frame::FrameList;
use potato_core::layout::{AspectRatio, Layout};
use potato_core::parser::{Parser, ParserOptions};
use potato_core::presentation::Presentation;
use potato_core::template::{TemplateError, load_template, template_path};
use potato_render::{FramePainter, OutlinePainter, OutputMode, Page, pages};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;

#[derive(ClapParser, Debug)]
#[command(name = "potato")]
#[command(author, version, about = "Compile Potato presentations", long_about = None)]
struct Args {
    /// Input .potato file
    input: PathBuf,

    /// Output file (default: next to the input)
    #[arg(short, long, env = "POTATO_OUTPUT")]
    output: Option<PathBuf>,

    /// One page per frame instead of one per reveal step
    #[arg(long, env = "POTATO_HANDOUT")]
    handout: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json, env = "POTATO_FORMAT")]
    format: Format,

    /// Value of %{resourcepath} (default: the input's directory)
    #[arg(long, env = "POTATO_RESOURCE_PATH")]
    resource_path: Option<String>,

    /// Value of %{date} (default: today)
    #[arg(long, env = "POTATO_DATE")]
    date: Option<String>,

    /// Page aspect ratio
    #[arg(long, value_enum, default_value_t = Ratio::Wide, env = "POTATO_RATIO")]
    ratio: Ratio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// The compiled document as JSON
    Json,
    /// A text listing of every output page
    Pages,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Pages => "txt",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Ratio {
    /// 16:9
    Wide,
    /// 4:3
    Standard,
}

impl From<Ratio> for AspectRatio {
    fn from(ratio: Ratio) -> Self {
        match ratio {
            Ratio::Wide => AspectRatio::SixteenToNine,
            Ratio::Standard => AspectRatio::FourToThree,
        }
    }
}

/// An error tied to a source line, printed as `Line N: message`.
#[derive(Debug, Error)]
#[error("Line {line}: {message}")]
struct LineError {
    /// 1-based.
    line: usize,
    message: String,
}

impl From<ParserError> for LineError {
    fn from(err: ParserError) -> Self {
        Self {
            line: err.display_line(),
            message: err.message(),
        }
    }
}

/// JSON output.
#[derive(Debug, Serialize)]
struct Document<'a> {
    template: Option<&'a str>,
    mode: OutputMode,
    pages: Vec<Page>,
    frames: &'a FrameList,
}

impl Args {
    fn mode(&self) -> OutputMode {
        if self.handout { OutputMode::Handout } else { OutputMode::Pause }
    }

    fn options(&self) -> ParserOptions {
        let resource_path = self
            .resource_path
            .clone()
            .unwrap_or_else(|| input_dir(&self.input).to_string_lossy().into_owned());
        let options = ParserOptions::default()
            .with_resource_path(resource_path)
            .with_layout(Layout::new(self.ratio.into()));
        match &self.date {
            Some(date) => options.with_date(date.clone()),
            None => options,
        }
    }

    /// `<stem>.<ext>`, or `<stem>_handout.<ext>`, next to the input.
    fn output_path(&self) -> PathBuf {
        if let Some(output) = &self.output {
            return output.clone();
        }
        let stem = self
            .input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "presentation".to_string());
        let suffix = if self.handout { "_handout" } else { "" };
        self.input
            .with_file_name(format!("{stem}{suffix}.{}", self.format.extension()))
    }
}

fn input_dir(input: &Path) -> &Path {
    match input.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

/// Compile `source`, loading its template relative to `base_dir`.
fn load_presentation(source: &str, base_dir: &Path, options: ParserOptions) -> anyhow::Result<Presentation> {
    let mut parser = Parser::new(options.clone());
    parser.load_input(source);
    let preamble = parser.read_preamble().map_err(LineError::from)?;

    let template = match &preamble.template_name {
        Some(name) => {
            log::debug!("template file {}", template_path(name, base_dir).display());
            let template = load_template(&base_dir.join(name), options).map_err(|err: TemplateError| {
                LineError {
                    line: preamble.line + 1,
                    message: err.to_string(),
                }
            })?;
            // Document variables win over the template's.
            let mut variables = template.variables().clone();
            variables.extend(parser.variables().clone());
            parser.set_variables(variables);
            Some(Arc::new(template))
        }
        None => None,
    };

    let frames = parser.read_input().map_err(LineError::from)?;
    let mut presentation = Presentation::new();
    presentation.set_data(frames, template);
    Ok(presentation)
}

fn render_pages(presentation: &Presentation, pages: &[Page]) -> anyhow::Result<String> {
    let frame_painter = FramePainter::new(presentation);
    let mut painter = OutlinePainter::new();
    for page in pages {
        frame_painter.paint(page.frame, page.reveal, &mut painter)?;
    }
    Ok(painter.finish())
}

fn run(args: &Args) -> anyhow::Result<PathBuf> {
    if !args.input.is_file() {
        anyhow::bail!("Input file does not exist: {}", args.input.display());
    }
    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("Cannot read {}", args.input.display()))?;
    let presentation = load_presentation(&source, input_dir(&args.input), args.options())?;

    let mode = args.mode();
    let pages = pages(&presentation, mode);
    let contents = match args.format {
        Format::Json => {
            let document = Document {
                template: presentation.template().map(|t| t.name()),
                mode,
                pages,
                frames: presentation.frames(),
            };
            serde_json::to_string_pretty(&document)?
        }
        Format::Pages => render_pages(&presentation, &pages)?,
    };

    let output = args.output_path();
    fs::write(&output, contents).with_context(|| format!("Cannot write {}", output.display()))?;
    Ok(output)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(output) => {
            log::info!("Successfully generated: {}", output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
