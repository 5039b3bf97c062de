//! Benchmarks for inkhue. Run with: `cargo bench -p ink-bench`
