/// Index buffer for a row-major `u_count × v_count` vertex grid, two
/// triangles per cell, no wrapping in either direction.
///
/// Counts below 2 produce an empty buffer.
#[must_use]
pub fn triangulate_grid(u_count: usize, v_count: usize) -> Vec<u32> {
    if u_count < 2 || v_count < 2 {
        return Vec::new();
    }

    let cells_u = u_count - 1;
    let cells_v = v_count - 1;
    let mut indices = Vec::with_capacity(cells_u * cells_v * 6);

    for row in 0..cells_v {
        let lower = row * u_count;
        let upper = lower + u_count;
        for col in 0..cells_u {
            let i0 = (lower + col) as u32;
            let i1 = (lower + col + 1) as u32;
            let i2 = (upper + col) as u32;
            let i3 = (upper + col + 1) as u32;

            indices.extend_from_slice(&[i0, i1, i2]);
            indices.extend_from_slice(&[i2, i1, i3]);
        }
    }

    indices
}
