
/// Soft transcoder.
pub mod transcode;
