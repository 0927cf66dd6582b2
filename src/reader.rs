use anyhow::{Context, Result};
use memmap2::MmapOptions;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, BufReader};
use tracing::{debug, info};

/// Configuration for input reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
    /// Map input files into memory instead of buffered reads
    pub use_mmap: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            buffer_size: 8192,
            use_mmap: false,
        }
    }
}

/// Where the text to summarize comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `None` or `-` reads stdin
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            Some(path) if path != Path::new("-") => InputSource::File(path.to_path_buf()),
            _ => InputSource::Stdin,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

/// Statistics for one read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub source: String,
    pub bytes_read: u64,
    pub chars_read: u64,
    pub duration_ms: u64,
}

/// Reads a whole input text into memory
pub struct InputReader {
    config: ReaderConfig,
}

impl InputReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read the full input as UTF-8 text
    pub async fn read(&self, source: &InputSource) -> Result<(String, ReadStats)> {
        let start_time = std::time::Instant::now();
        debug!("Starting read of {}", source.describe());

        let text = match source {
            InputSource::Stdin => self.read_buffered(tokio::io::stdin(), source).await?,
            InputSource::File(path) if self.config.use_mmap => Self::read_mmap(path)?,
            InputSource::File(path) => {
                let file = File::open(path)
                    .await
                    .with_context(|| format!("Failed to open input file {}", path.display()))?;
                self.read_buffered(file, source).await?
            }
        };

        let stats = ReadStats {
            source: source.describe(),
            bytes_read: text.len() as u64,
            chars_read: text.chars().count() as u64,
            duration_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            "Read {}: {} bytes, {} chars in {}ms",
            stats.source, stats.bytes_read, stats.chars_read, stats.duration_ms
        );
        Ok((text, stats))
    }

    async fn read_buffered<R>(&self, inner: R, source: &InputSource) -> Result<String>
    where
        R: AsyncRead + Unpin,
    {
        let mut reader = BufReader::with_capacity(self.config.buffer_size, inner);
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .await
            .with_context(|| format!("Failed to read {}", source.describe()))?;

        String::from_utf8(bytes)
            .with_context(|| format!("Input {} is not valid UTF-8", source.describe()))
    }

    fn read_mmap(path: &Path) -> Result<String> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open input file {}", path.display()))?;
        if file.metadata()?.len() == 0 {
            return Ok(String::new());
        }

        // SAFETY: the mapping is copied into an owned String before it is dropped
        let mmap = unsafe { MmapOptions::new().map(&file) }
            .with_context(|| format!("Failed to map input file {}", path.display()))?;
        let text = std::str::from_utf8(&mmap)
            .with_context(|| format!("Input {} is not valid UTF-8", path.display()))?;
        Ok(text.to_owned())
    }
}

/// Read a single file with default configuration
pub async fn read_file_async<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let reader = InputReader::new(ReaderConfig::default());
    let source = InputSource::File(file_path.as_ref().to_path_buf());
    let (text, _stats) = reader.read(&source).await?;
    Ok(text)
}
