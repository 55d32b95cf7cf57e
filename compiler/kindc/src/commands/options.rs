//! Hand-parsed command options.

use std::path::PathBuf;

use kind_diagnostic::emitter::ColorMode;

/// How diagnostics are printed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable, to stderr.
    #[default]
    Human,
    /// A JSON array, to stdout.
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "human" => Some(OutputFormat::Human),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Options shared by every command that reports diagnostics.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub color: ColorMode,
}

impl Default for OutputOptions {
    fn default() -> Self {
        OutputOptions {
            format: OutputFormat::Human,
            color: ColorMode::Auto,
        }
    }
}

impl OutputOptions {
    /// Apply `--format=` or `--color=`. Returns `Ok(false)` for other flags.
    fn apply(&mut self, arg: &str) -> Result<bool, String> {
        if let Some(value) = arg.strip_prefix("--format=") {
            self.format = OutputFormat::parse(value)
                .ok_or_else(|| format!("invalid format '{value}' (expected human or json)"))?;
            Ok(true)
        } else if let Some(value) = arg.strip_prefix("--color=") {
            self.color = ColorMode::parse(value).ok_or_else(|| {
                format!("invalid color mode '{value}' (expected auto, always or never)")
            })?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

/// `kindc generate <archive>... -o <dir> [options]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOptions {
    pub archives: Vec<PathBuf>,
    pub output: PathBuf,
    pub runtime: Option<String>,
    pub prune: bool,
    pub report: OutputOptions,
}

/// `kindc extract <src-dir> [--crate=<name>] [-o <archive>]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    pub src_dir: PathBuf,
    pub crate_name: String,
    pub output: PathBuf,
    pub report: OutputOptions,
}

/// Parse the arguments after `generate`.
pub fn parse_generate_args(args: &[String]) -> Result<GenerateOptions, String> {
    let mut archives = Vec::new();
    let mut output = None;
    let mut runtime = None;
    let mut prune = false;
    let mut report = OutputOptions::default();

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "-o" {
            let value = args.get(i + 1).ok_or("-o needs a directory")?;
            output = Some(PathBuf::from(value));
            i += 2;
            continue;
        }
        if let Some(value) = arg.strip_prefix("--runtime=") {
            if value.is_empty() {
                return Err("--runtime needs a path".to_owned());
            }
            runtime = Some(value.to_owned());
        } else if arg == "--prune" {
            prune = true;
        } else if report.apply(arg)? {
            // --format= or --color=
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else {
            archives.push(PathBuf::from(arg));
        }
        i += 1;
    }

    if archives.is_empty() {
        return Err("no metadata archives given".to_owned());
    }
    Ok(GenerateOptions {
        archives,
        output: output.ok_or("missing output directory (-o <dir>)")?,
        runtime,
        prune,
        report,
    })
}

/// Parse the arguments after `extract`.
///
/// The crate name defaults to the name of the directory containing
/// `src-dir`, and the archive to `<crate>.kmda`.
pub fn parse_extract_args(args: &[String]) -> Result<ExtractOptions, String> {
    let mut src_dir = None;
    let mut crate_name = None;
    let mut output = None;
    let mut report = OutputOptions::default();

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "-o" {
            let value = args.get(i + 1).ok_or("-o needs a file")?;
            output = Some(PathBuf::from(value));
            i += 2;
            continue;
        }
        if let Some(value) = arg.strip_prefix("--crate=") {
            crate_name = Some(value.to_owned());
        } else if report.apply(arg)? {
            // --format= or --color=
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if src_dir.is_none() {
            src_dir = Some(PathBuf::from(arg));
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
        i += 1;
    }

    let src_dir = src_dir.ok_or("missing source directory")?;
    let crate_name = match crate_name {
        Some(name) => name,
        None => src_dir
            .canonicalize()
            .ok()
            .as_deref()
            .and_then(|dir| dir.parent())
            .and_then(|dir| dir.file_name())
            .and_then(|name| name.to_str())
            .map(str::to_owned)
            .ok_or("cannot infer the crate name; pass --crate=<name>")?,
    };
    if crate_name.is_empty() {
        return Err("the crate name cannot be empty".to_owned());
    }
    let output = output.unwrap_or_else(|| PathBuf::from(format!("{crate_name}.kmda")));
    Ok(ExtractOptions {
        src_dir,
        crate_name,
        output,
        report,
    })
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
