//! PNG output rendered by the Graphviz `dot` executable.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use gocallgraph_core::errors::ExportError;
use tracing::debug;

/// Rasterizes DOT text with an external Graphviz binary.
pub struct PngExporter {
    binary: String,
}

impl PngExporter {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Pipe already-rendered DOT text through `<binary> -Tpng`.
    pub fn rasterize(&self, dot: &[u8]) -> Result<Vec<u8>, ExportError> {
        debug!(binary = %self.binary, bytes = dot.len(), "rendering PNG");

        let mut child = Command::new(&self.binary)
            .arg("-Tpng")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => ExportError::RendererNotFound {
                    binary: self.binary.clone(),
                },
                _ => self.failed(e.to_string()),
            })?;

        // Feed stdin from a second thread so a full stdout pipe cannot block us.
        let stdin = child.stdin.take();
        let (output, written) = std::thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => stdin.write_all(dot),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")));
            (output, written)
        });

        let output = output.map_err(|e| self.failed(e.to_string()))?;
        if !output.status.success() {
            return Err(self.failed(format!(
                "{}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        written.map_err(|e| self.failed(e.to_string()))?;

        Ok(output.stdout)
    }

    fn failed(&self, message: String) -> ExportError {
        ExportError::RenderFailed {
            binary: self.binary.clone(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_binary_is_renderer_not_found() {
        let png = PngExporter::new("gocallgraph-no-such-graphviz");
        let err = png.rasterize(b"digraph \"g\" {\n}\n").unwrap_err();
        assert!(matches!(err, ExportError::RendererNotFound { ref binary } if binary == "gocallgraph-no-such-graphviz"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_render_failed() {
        // `false` ignores its arguments and exits 1.
        let png = PngExporter::new("false");
        let err = png.rasterize(b"digraph \"g\" {\n}\n").unwrap_err();
        assert!(matches!(err, ExportError::RenderFailed { .. }));
    }
}
