/// Configuration for an analysis run
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Worker threads, `None` for one per CPU
    pub jobs: Option<usize>,
    /// Read buffer capacity per file, zero is treated as one byte
    pub buffer_size: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            jobs: None,
            buffer_size: 65536, // 64KB
        }
    }
}
