use rle::config::RleConfig;
use rle::pipeline;

fn main() {
	let data = b"aaaaaaaabbbbbbbbbbccccccccccccd".to_vec();
	let mut input = std::io::Cursor::new(data);
	let mut compressed = Vec::new();
	let cfg = RleConfig::default();
	let stats = pipeline::perform_encoding(&mut input, &mut compressed, &cfg).unwrap();
	println!("compressed {} -> {}", stats.bytes_read, stats.bytes_written);

	let mut comp_cur = std::io::Cursor::new(compressed);
	let mut restored = Vec::new();
	pipeline::perform_decoding(&mut comp_cur, &mut restored, &cfg).unwrap();
	println!("restored {} bytes", restored.len());
}
