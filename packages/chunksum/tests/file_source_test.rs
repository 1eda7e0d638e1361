//! File adapter behaviour against real temporary files

use chunksum::{
    digest_buffer, digest_file, digest_file_async, Checksum, ChecksumConfig, ChecksumExt,
    ChunkSize, DigestAlgorithm, HashError,
};
use std::io::Write;
use std::path::Path;

fn sample_data() -> Vec<u8> {
    (0..100_000u32).map(|i| (i * 31 % 256) as u8).collect()
}

fn write_temp(data: &[u8]) -> Result<tempfile::NamedTempFile, Box<dyn std::error::Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(data)?;
    file.flush()?;
    Ok(file)
}

#[test]
fn file_digest_matches_buffer_digest() -> Result<(), Box<dyn std::error::Error>> {
    let data = sample_data();
    let file = write_temp(&data)?;

    for algorithm in DigestAlgorithm::ALL {
        assert_eq!(
            digest_file(file.path(), algorithm, ChunkSize::default())?,
            digest_buffer(&data, algorithm, ChunkSize::default()),
            "{algorithm}"
        );
    }
    Ok(())
}

#[test]
fn empty_file_hashes_as_empty_message() -> Result<(), Box<dyn std::error::Error>> {
    let file = write_temp(&[])?;
    assert_eq!(
        digest_file(file.path(), DigestAlgorithm::Md5, ChunkSize::default())?,
        "d41d8cd98f00b204e9800998ecf8427e"
    );
    Ok(())
}

#[test]
fn chunk_size_does_not_affect_file_digest() -> Result<(), Box<dyn std::error::Error>> {
    let file = write_temp(&sample_data())?;
    let small = Checksum::sha512()
        .with_chunk_size(ChunkSize::new(7)?)
        .compute_file(file.path())?;
    let large = Checksum::sha512()
        .with_chunk_size(ChunkSize::new(1 << 20)?)
        .compute_file(file.path())?;
    assert_eq!(small, large);
    Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = match tempfile::tempdir() {
        Ok(dir) => dir,
        Err(e) => panic!("failed to create temp dir: {e}"),
    };
    let missing = dir.path().join("does-not-exist.bin");

    let result = digest_file(&missing, DigestAlgorithm::Sha256, ChunkSize::default());
    match result {
        Err(HashError::Io { path, source }) => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected I/O error, got {other:?}"),
    }
}

#[test]
fn path_extension_trait() -> Result<(), Box<dyn std::error::Error>> {
    let file = write_temp(b"abc")?;
    let path: &Path = file.path();
    assert_eq!(
        path.checksum(DigestAlgorithm::Sha256)?,
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    Ok(())
}

#[test]
fn config_file_drives_builder() -> Result<(), Box<dyn std::error::Error>> {
    let config_file = write_temp(br#"{ "algorithm": "SHA-1", "chunk_size": 2 }"#)?;
    // Hyphenated names are accepted by `FromStr`, not by serde
    assert!(matches!(
        ChecksumConfig::from_path(config_file.path()),
        Err(HashError::Configuration(_))
    ));

    let config_file = write_temp(br#"{ "algorithm": "sha1", "chunk_size": 2 }"#)?;
    let config = ChecksumConfig::from_path(config_file.path())?;
    let builder = Checksum::from_config(&config);
    assert_eq!(builder.algorithm(), DigestAlgorithm::Sha1);
    assert_eq!(builder.chunk_size().get(), 2);

    let data_file = write_temp(b"abc")?;
    assert_eq!(
        builder.compute_file(data_file.path())?.to_hex(),
        "a9993e364706816aba3e25717850c26c9cd0d89d"
    );
    Ok(())
}

#[tokio::test]
async fn async_file_digest_matches_sync() -> Result<(), Box<dyn std::error::Error>> {
    let file = write_temp(&sample_data())?;
    let expected = digest_file(file.path(), DigestAlgorithm::Sha384, ChunkSize::default())?;
    let actual = digest_file_async(file.path(), DigestAlgorithm::Sha384, ChunkSize::default()).await?;
    assert_eq!(actual, expected);

    let via_builder = Checksum::sha384().compute_file_async(file.path()).await?;
    assert_eq!(via_builder.to_hex(), expected);
    Ok(())
}

#[tokio::test]
async fn async_missing_file_is_an_io_error() {
    let result = digest_file_async(
        "/definitely/not/a/real/path.bin",
        DigestAlgorithm::Md5,
        ChunkSize::default(),
    )
    .await;
    assert!(matches!(result, Err(HashError::Io { .. })));
}
