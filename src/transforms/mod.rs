pub mod rle;
