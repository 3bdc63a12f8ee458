use crate::error::ProbeError;

pub fn reserve_memory(bytes: usize) -> Result<usize, ProbeError> {
    let mut buffer: Vec<u8> = Vec::new();
    buffer
        .try_reserve_exact(bytes)
        .map_err(|source| ProbeError::Allocation {
            requested: bytes,
            source,
        })?;
    Ok(buffer.capacity())
}
