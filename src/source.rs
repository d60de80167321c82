use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::errors::SrcgenError;
use crate::lexer::{Lexer, TokenKind};
use crate::line::{Template, TemplateKind};

pub const DEFAULT_LINES: usize = 1_000_000;
pub const DEFAULT_OUTPUT: &str = "src_file";

const PROGRESS_INTERVAL: usize = 100_000;

#[derive(Debug, Clone)]
pub struct SourceRequest {
    pub lines: usize,
    pub seed: Option<u64>,
    pub output: PathBuf,
}

impl Default for SourceRequest {
    fn default() -> Self {
        Self {
            lines: DEFAULT_LINES,
            seed: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceSummary {
    pub lines: usize,
    pub bytes: u64,
    pub per_template: [usize; 4],
}

impl SourceSummary {
    fn record(&mut self, kind: TemplateKind, line_len: usize) {
        self.lines += 1;
        self.bytes += line_len as u64;
        self.per_template[kind.index()] += 1;
    }

    pub fn count(&self, kind: TemplateKind) -> usize {
        self.per_template[kind.index()]
    }
}

pub struct SourceWriter {
    request: SourceRequest,
    rng: StdRng,
}

impl SourceWriter {
    pub fn new(request: SourceRequest) -> Self {
        let rng = match request.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self { request, rng }
    }

    pub fn output(&self) -> &Path {
        &self.request.output
    }

    /// Writes the requested number of lines, separated (not terminated) by `\n`.
    pub fn write_source_file(&mut self) -> Result<SourceSummary, SrcgenError> {
        let path = self.request.output.clone();
        info!(
            "Generating {} lines into {} (seed: {:?})",
            self.request.lines,
            path.display(),
            self.request.seed
        );

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .map_err(|e| SrcgenError::create(&path, e))?;

        let mut writer = BufWriter::new(file);
        let summary = self
            .emit(&mut writer)
            .map_err(|e| SrcgenError::write(&path, e))?;
        writer.flush().map_err(|e| SrcgenError::write(&path, e))?;

        info!("Wrote {} lines ({} bytes) to {}", summary.lines, summary.bytes, path.display());
        for kind in TemplateKind::ALL {
            debug!("{}: {} lines", kind.name(), summary.count(kind));
        }

        Ok(summary)
    }

    /// Same content `write_source_file` would produce, kept in memory.
    #[cfg(test)]
    pub fn render_to_string(&mut self) -> String {
        let mut buffer = Vec::new();
        self.emit(&mut buffer).expect("writing to a Vec cannot fail");

        String::from_utf8_lossy(&buffer).into_owned()
    }

    fn emit<W: Write>(&mut self, out: &mut W) -> std::io::Result<SourceSummary> {
        let mut summary = SourceSummary::default();

        for i in 0..self.request.lines {
            if i > 0 {
                out.write_all(b"\n")?;
                summary.bytes += 1;
            }

            let template = Template::random(&mut self.rng);
            let line = template.to_string();
            out.write_all(line.as_bytes())?;
            summary.record(template.kind(), line.len());

            if (i + 1) % PROGRESS_INTERVAL == 0 {
                trace!("{} lines generated", i + 1);
            }
        }

        Ok(summary)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexReport {
    pub tokens: usize,
    pub quoted_bytes: usize,
    pub largest_integer: u64,
}

/// Reads a fixture back and runs it through the lexer. Every line must
/// tokenize and every string literal must close on its own line.
pub fn verify_source_file(path: &Path) -> Result<LexReport, SrcgenError> {
    let src = fs::read_to_string(path).map_err(|e| SrcgenError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let tokens = Lexer::new(&src).lex().map_err(|e| SrcgenError::Lex {
        path: path.to_path_buf(),
        line: src.as_bytes()[..e.offset()].iter().filter(|&&b| b == b'\n').count() + 1,
        source: e,
    })?;

    let mut report = LexReport {
        tokens: tokens.len(),
        ..LexReport::default()
    };
    for token in &tokens {
        match token.kind {
            TokenKind::Quote => report.quoted_bytes += token.span.width(),
            TokenKind::Integer => {
                // oversized literals saturate
                let value = token.text.parse::<u64>().unwrap_or(u64::MAX);
                report.largest_integer = report.largest_integer.max(value);
            }
            _ => {}
        }
    }

    debug!(
        "{} lexed: {} tokens, {} quoted bytes",
        path.display(),
        report.tokens,
        report.quoted_bytes
    );

    Ok(report)
}
