use std::io;

use flate2::{Compress, Compression as Flate2Level, Decompress, FlushCompress, FlushDecompress, Status};

/// Compresses and decompresses the `PackageVersionData` index manifest ("mszyml").
///
/// MSZIP splits its input into independently-compressed blocks of up to 32KiB, each prefixed with
/// a two-byte `CK` signature and deflated with a fresh window (no cross-block dictionary) so a
/// decoder can resynchronize at any block boundary. `flate2` has no MSZIP codec, but its raw
/// DEFLATE codec is the algorithm MSZIP wraps, so this façade reproduces the `CK`-framed block
/// layout directly on top of it.
const BLOCK_SIZE: usize = 32 * 1024;
const BLOCK_SIGNATURE: [u8; 2] = *b"CK";

pub fn compress(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut out = Vec::with_capacity(data.len());
    for chunk in data.chunks(BLOCK_SIZE) {
        out.extend_from_slice(&BLOCK_SIGNATURE);
        out.extend_from_slice(&compress_block(chunk)?);
    }
    Ok(out)
}

pub fn decompress(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut cursor = 0;
    while cursor < data.len() {
        let signature = data.get(cursor..cursor + 2).ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "truncated MSZIP block signature")
        })?;
        if signature != BLOCK_SIGNATURE {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "missing MSZIP block signature"));
        }
        cursor += 2;

        let (block, consumed) = decompress_block(&data[cursor..])?;
        out.extend_from_slice(&block);
        cursor += consumed;
    }
    Ok(out)
}

fn compress_block(chunk: &[u8]) -> io::Result<Vec<u8>> {
    let mut compress = Compress::new(Flate2Level::default(), false);
    let mut out = Vec::with_capacity(chunk.len());
    loop {
        let consumed_so_far = compress.total_in() as usize;
        let status = compress
            .compress_vec(&chunk[consumed_so_far..], &mut out, FlushCompress::Finish)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err.to_string()))?;
        if status == Status::StreamEnd {
            return Ok(out);
        }
    }
}

/// Decompresses one block starting at the beginning of `data` (just past its `CK` signature),
/// returning the decompressed bytes and how many input bytes the block consumed.
fn decompress_block(data: &[u8]) -> io::Result<(Vec<u8>, usize)> {
    let mut decompress = Decompress::new(false);
    let mut out = Vec::with_capacity(BLOCK_SIZE);
    loop {
        let consumed_so_far = decompress.total_in() as usize;
        if consumed_so_far >= data.len() {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "truncated MSZIP block"));
        }
        let status = decompress
            .decompress_vec(&data[consumed_so_far..], &mut out, FlushDecompress::None)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err.to_string()))?;
        if status == Status::StreamEnd {
            return Ok((out, decompress.total_in() as usize));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_single_block() {
        let original = b"sV: 2\nvD: []\n".to_vec();
        let compressed = compress(&original).unwrap();
        assert!(compressed.starts_with(&BLOCK_SIGNATURE));
        assert_eq!(decompress(&compressed).unwrap(), original);
    }

    #[test]
    fn round_trips_across_multiple_blocks() {
        let original: Vec<u8> = (0..BLOCK_SIZE * 2 + 17).map(|i| (i % 251) as u8).collect();
        let compressed = compress(&original).unwrap();
        assert!(compressed.iter().filter(|&&b| b == b'C').count() >= 3);
        assert_eq!(decompress(&compressed).unwrap(), original);
    }

    #[test]
    fn round_trips_empty_input() {
        assert_eq!(decompress(&compress(&[]).unwrap()).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn missing_signature_is_rejected() {
        assert!(decompress(b"not a block").is_err());
    }
}
