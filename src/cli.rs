use crate::config::{Mode, RleConfig, ZeroCountPolicy, CHUNK_SIZE};
use crate::error::RleError;
use crate::pipeline;
use clap::{ArgGroup, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "Run-length encodes or decodes a file in fixed-size chunks (default 512 bytes)")]
#[command(group(ArgGroup::new("mode").required(true).args(["compress", "decompress"])))]
pub struct Cli {
    /// Compress INPUT
    #[arg(short, long)]
    pub compress: bool,

    /// Decompress INPUT
    #[arg(short, long)]
    pub decompress: bool,

    /// Output file name (default: INPUT.out)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Bytes processed per chunk; must be even when decompressing
    #[arg(long, default_value_t = CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Handling of zero-length runs when decompressing [reject, skip]
    #[arg(long, value_name = "POLICY", default_value = "reject")]
    pub zero_runs: ZeroCountPolicy,

    /// Show a progress bar while reading INPUT
    #[arg(long)]
    pub progress: bool,

    /// Input file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.compress { Mode::Compress } else { Mode::Decompress }
    }

    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => {
                let mut name = self.input.clone().into_os_string();
                name.push(".out");
                PathBuf::from(name)
            }
        }
    }

    pub fn config(&self) -> RleConfig {
        RleConfig::default()
            .with_chunk_size(self.chunk_size)
            .with_zero_count(self.zero_runs)
    }
}

pub fn run() -> Result<(), RleError> {
    let cli = Cli::parse();
    execute(&cli)
}

/// Opens the files named by `cli`, runs the selected driver and removes the
/// output file if the driver fails.
pub fn execute(cli: &Cli) -> Result<(), RleError> {
    let mode = cli.mode();
    let config = cli.config();
    let output = cli.output_path();
    let verb = match mode { Mode::Compress => "Compressing", Mode::Decompress => "Decompressing" };
    println!("{} {} to {}...", verb, cli.input.display(), output.display());

    let in_file = File::open(&cli.input).map_err(|source| RleError::Open { path: cli.input.clone(), source })?;
    let out_file = File::create(&output).map_err(|source| RleError::Open { path: output.clone(), source })?;

    let mut reader = BufReader::new(in_file);
    let mut writer = BufWriter::new(out_file);

    let start = Instant::now();
    let result = if cli.progress {
        // Only sizes the bar; an unknown length leaves it at zero.
        let input_len = reader.get_ref().metadata().map(|m| m.len()).unwrap_or(0);
        let pb = progress_bar(input_len);
        let mut reader = pb.wrap_read(reader);
        let result = pipeline::process(mode, &mut reader, &mut writer, &config);
        pb.finish_and_clear();
        result
    } else {
        pipeline::process(mode, &mut reader, &mut writer, &config)
    };
    drop(writer);

    let stats = match result {
        Ok(stats) => stats,
        Err(e) => {
            discard_output(&output);
            return Err(e);
        }
    };
    let duration = start.elapsed();

    println!("Done!");
    println!("  Input Size:   {} bytes", stats.bytes_read);
    println!("  Output Size:  {} bytes", stats.bytes_written);
    println!("  Chunks:       {}", stats.chunks);
    if mode == Mode::Compress {
        println!("  Ratio:        {:.2}x", stats.ratio());
    }
    println!("  Elapsed Time: {:.2?}", duration);

    Ok(())
}

fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})",
    ) {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb
}

fn discard_output(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => log::warn!("removed incomplete output {}", path.display()),
        Err(e) => log::warn!("could not remove incomplete output {}: {}", path.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(args)
    }

    #[test]
    fn test_multiple_modes_rejected() {
        assert!(parse(&["rle", "-c", "-d", "input.file"]).is_err());
    }

    #[test]
    fn test_missing_output_value() {
        assert!(parse(&["rle", "-c", "input.file", "-o"]).is_err());
    }

    #[test]
    fn test_missing_input() {
        assert!(parse(&["rle", "-c"]).is_err());
        assert!(parse(&["rle", "-d", "-o", "out.file"]).is_err());
    }

    #[test]
    fn test_missing_mode() {
        assert!(parse(&["rle", "input.file"]).is_err());
    }

    #[test]
    fn test_unknown_zero_run_policy() {
        assert!(parse(&["rle", "-d", "--zero-runs", "ignore", "packed.rle"]).is_err());
    }

    #[test]
    fn test_unexpected_argument() {
        assert!(parse(&["rle", "-c", "input.file", "extra.file"]).is_err());
    }

    #[test]
    fn test_compress_defaults() {
        let cli = parse(&["rle", "-c", "input.file"]).unwrap();
        assert_eq!(cli.mode(), Mode::Compress);
        assert_eq!(cli.input, PathBuf::from("input.file"));
        assert_eq!(cli.output_path(), PathBuf::from("input.file.out"));

        let config = cli.config();
        assert_eq!(config.chunk_size, CHUNK_SIZE);
        assert_eq!(config.zero_count, ZeroCountPolicy::Reject);
    }

    #[test]
    fn test_decompress_with_options() {
        let cli = parse(&[
            "rle", "-d", "-o", "restored.bin", "--chunk-size", "1024", "--zero-runs", "skip", "packed.rle",
        ])
        .unwrap();
        assert_eq!(cli.mode(), Mode::Decompress);
        assert_eq!(cli.output_path(), PathBuf::from("restored.bin"));

        let config = cli.config();
        assert_eq!(config.chunk_size, 1024);
        assert_eq!(config.zero_count, ZeroCountPolicy::Skip);
    }
}
