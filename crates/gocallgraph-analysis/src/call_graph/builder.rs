//! Call graph builder: walk → extract → aggregate.
//!
//! Discovery is a single-threaded walk. Reading and parsing may fan out over a
//! local rayon pool, but results are collected in walk order and folded into
//! the graph on the calling thread, so the last declaration in walk order
//! always wins a name collision.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use gocallgraph_core::config::ScanConfig;
use gocallgraph_core::errors::{ErrorCode, PipelineError, ScanError};
use gocallgraph_core::types::{CallGraph, FunctionRecord};
use rayon::prelude::*;
use tracing::{debug, info, info_span, warn};

use super::types::{BuildResult, BuildStats, FileFailure};
use crate::parsers::SyntaxExtractor;
use crate::scanner::{Language, SourceWalker};

type FileOutcome = Result<Vec<FunctionRecord>, FileFailure>;

/// Builds a `CallGraph` for one source root.
pub struct CallGraphBuilder {
    config: ScanConfig,
    language: Language,
}

impl CallGraphBuilder {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            language: Language::Go,
        }
    }

    /// Run the full pipeline over `root`.
    ///
    /// Fails only on setup problems (unreadable root, grammar/query failure).
    /// Unreadable entries and files with syntax errors are logged, counted in
    /// `BuildStats`, and skipped.
    pub fn build(&self, root: &Path) -> Result<BuildResult, PipelineError> {
        let start = Instant::now();
        let _span = info_span!("build", root = %root.display()).entered();
        info!("Analyzing source directory: {}", root.display());

        let mut stats = BuildStats::default();
        let walker = SourceWalker::new(&self.config);

        let mut files = Vec::new();
        for entry in walker.walk(root)? {
            match entry {
                Ok(path) => files.push(path),
                Err(e) => record_failure(&mut stats, &FileFailure::Access(e)),
            }
        }
        stats.files_discovered = files.len();

        let extractor = SyntaxExtractor::new(self.language)?;
        let outcomes = self.extract_all(extractor, &files);

        let mut graph = CallGraph::new();
        for (path, outcome) in files.iter().zip(outcomes) {
            match outcome {
                Ok(records) => {
                    stats.files_parsed += 1;
                    for record in records {
                        if let Some(previous) = graph.insert(record) {
                            stats.overwritten += 1;
                            debug!(
                                function = %previous.name,
                                previous = %previous.file_path.display(),
                                current = %path.display(),
                                "declaration overwritten by later file"
                            );
                        }
                    }
                }
                Err(FileFailure::Parse(e)) if !e.is_per_file() => return Err(e.into()),
                Err(failure) => record_failure(&mut stats, &failure),
            }
        }

        stats.functions = graph.len();
        stats.call_sites = graph.call_count();
        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!("Processed {} files", stats.files_discovered);
        info!("Found {} functions", stats.functions);
        if stats.parse_failures + stats.access_failures > 0 {
            warn!(
                parse_failures = stats.parse_failures,
                access_failures = stats.access_failures,
                "some files were skipped"
            );
        }

        Ok(BuildResult { graph, stats })
    }

    /// Read and parse every file, returning outcomes in the same order as
    /// `files`.
    fn extract_all(
        &self,
        mut extractor: SyntaxExtractor,
        files: &[PathBuf],
    ) -> Vec<FileOutcome> {
        let threads = self.config.effective_threads();
        if threads == 1 || files.len() < 2 {
            return files
                .iter()
                .map(|path| process_file(&mut extractor, path))
                .collect();
        }

        let pool = match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool,
            Err(e) => {
                warn!("failed to build worker pool, parsing sequentially: {e}");
                return files
                    .iter()
                    .map(|path| process_file(&mut extractor, path))
                    .collect();
            }
        };

        let language = extractor.language();
        let queries = extractor.shared_queries();
        pool.install(|| {
            files
                .par_iter()
                .map_init(
                    || SyntaxExtractor::with_queries(language, Arc::clone(&queries)),
                    |worker, path| match worker {
                        Ok(worker) => process_file(worker, path),
                        Err(e) => Err(FileFailure::Parse(e.clone())),
                    },
                )
                .collect()
        })
    }
}

impl Default for CallGraphBuilder {
    fn default() -> Self {
        Self::new(ScanConfig::default())
    }
}

fn process_file(extractor: &mut SyntaxExtractor, path: &Path) -> FileOutcome {
    debug!("Processing file: {}", path.display());
    let content = fs::read(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(extractor.extract(path, &content)?)
}

fn record_failure(stats: &mut BuildStats, failure: &FileFailure) {
    match failure {
        FileFailure::Access(_) => stats.access_failures += 1,
        FileFailure::Parse(_) => stats.parse_failures += 1,
    }
    warn!("Error processing file: {}", failure.coded_string());
    stats.errors.push(failure.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn sequential() -> CallGraphBuilder {
        CallGraphBuilder::new(ScanConfig {
            threads: Some(1),
            ..Default::default()
        })
    }

    #[test]
    fn test_build_single_file() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "main.go",
            "package main\n\nfunc a() { b(); c() }\nfunc b() { c() }\n",
        );

        let result = sequential().build(dir.path()).unwrap();
        assert_eq!(result.graph.len(), 2);
        assert_eq!(result.graph.get("a").unwrap().calls, vec!["b", "c"]);
        assert_eq!(result.graph.get("b").unwrap().calls, vec!["c"]);
        assert!(!result.graph.contains("c"));
        assert_eq!(result.stats.files_parsed, 1);
        assert_eq!(result.stats.call_sites, 3);
    }

    #[test]
    fn test_later_file_wins_name_collision() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a/first.go", "package a\n\nfunc f() { one() }\n");
        write(dir.path(), "b/second.go", "package b\n\nfunc f() { two(); three() }\n");

        let result = sequential().build(dir.path()).unwrap();
        let f = result.graph.get("f").unwrap();
        assert!(f.file_path.ends_with("b/second.go"));
        assert_eq!(f.calls, vec!["two", "three"]);
        assert_eq!(result.stats.overwritten, 1);
    }

    #[test]
    fn test_syntax_error_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "bad.go", "package main\n\nfunc broken( {\n");
        write(dir.path(), "good.go", "package main\n\nfunc fine() { helper() }\n");

        let result = sequential().build(dir.path()).unwrap();
        assert_eq!(result.graph.names().collect::<Vec<_>>(), vec!["fine"]);
        assert_eq!(result.stats.parse_failures, 1);
        assert_eq!(result.stats.files_parsed, 1);
        assert_eq!(result.stats.errors.len(), 1);
        assert!(result.stats.errors[0].contains("bad.go"));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let dir = TempDir::new().unwrap();
        for i in 0..24 {
            write(
                dir.path(),
                &format!("pkg{}/file{i:02}.go", i % 4),
                &format!("package p\n\nfunc shared() {{ v{i}() }}\nfunc own{i}() {{ shared(); shared() }}\n"),
            );
        }

        let seq = sequential().build(dir.path()).unwrap();
        let par = CallGraphBuilder::new(ScanConfig {
            threads: Some(4),
            ..Default::default()
        })
        .build(dir.path())
        .unwrap();

        assert_eq!(seq.graph, par.graph);
        assert_eq!(seq.stats.overwritten, par.stats.overwritten);
        assert_eq!(par.graph.len(), 25);
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let dir = TempDir::new().unwrap();
        let err = sequential().build(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, PipelineError::Scan(ScanError::RootNotFound { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_entry_is_counted_and_skipped() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.go", "package p\n\nfunc a() { c() }\n");
        write(dir.path(), "c.go", "package p\n\nfunc c() {}\n");
        std::os::unix::fs::symlink(dir.path().join("nowhere.go"), dir.path().join("b_link.go"))
            .unwrap();

        let result = CallGraphBuilder::new(ScanConfig {
            threads: Some(1),
            follow_symlinks: Some(true),
            ..Default::default()
        })
        .build(dir.path())
        .unwrap();

        assert_eq!(result.graph.names().collect::<Vec<_>>(), vec!["a", "c"]);
        assert_eq!(result.stats.access_failures, 1);
        assert_eq!(result.stats.parse_failures, 0);
        assert_eq!(result.stats.files_discovered, 2);
        assert_eq!(result.stats.errors.len(), 1);
        assert!(result.stats.errors[0].contains("b_link.go"));
    }
}
