use candle_core::Tensor;
use itertools::MultiUnzip;
use rsgcn_core::Result;

/// Convert a dense 2D matrix to coordinate form.
///
/// Returns `(values, rows, cols)` with one entry per cell that is not exactly
/// `0.0`, enumerated row by row. `NaN` and infinities are kept.
/// Values come back as `F32`, indices as `U32`, on the input's device.
pub fn dense_to_coo(dense: &Tensor) -> Result<(Tensor, Tensor, Tensor)> {
    let device = dense.device();
    let cells = dense.to_vec2::<f32>()?;
    let (values, rows, cols): (Vec<f32>, Vec<u32>, Vec<u32>) = cells
        .iter()
        .enumerate()
        .flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &v)| v != 0.0)
                .map(move |(j, &v)| (v, i as u32, j as u32))
        })
        .multiunzip();
    let nnz = values.len();
    Ok((
        Tensor::from_vec(values, nnz, device)?,
        Tensor::from_vec(rows, nnz, device)?,
        Tensor::from_vec(cols, nnz, device)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use candle_core::Device;

    #[test]
    fn test_row_major_order() -> anyhow::Result<()> {
        let device = Device::Cpu;
        let dense = Tensor::new(&[[0f32, 2., 0.], [3., 0., 4.], [0., 0., 5.]], &device)?;
        let (values, rows, cols) = dense_to_coo(&dense)?;
        assert_eq!(values.to_vec1::<f32>()?, vec![2., 3., 4., 5.]);
        assert_eq!(rows.to_vec1::<u32>()?, vec![0, 1, 1, 2]);
        assert_eq!(cols.to_vec1::<u32>()?, vec![1, 0, 2, 2]);
        Ok(())
    }

    #[test]
    fn test_keeps_non_finite_values() -> anyhow::Result<()> {
        let device = Device::Cpu;
        let dense = Tensor::new(&[[f32::INFINITY, 0.], [f32::NAN, -0.5]], &device)?;
        let (values, rows, cols) = dense_to_coo(&dense)?;
        let values = values.to_vec1::<f32>()?;
        assert_eq!(values.len(), 3);
        assert!(values[0].is_infinite());
        assert!(values[1].is_nan());
        assert_eq!(values[2], -0.5);
        assert_eq!(rows.to_vec1::<u32>()?, vec![0, 1, 1]);
        assert_eq!(cols.to_vec1::<u32>()?, vec![0, 0, 1]);
        Ok(())
    }

    #[test]
    fn test_all_zero_matrix() -> anyhow::Result<()> {
        let dense = Tensor::zeros((3, 3), candle_core::DType::F32, &Device::Cpu)?;
        let (values, rows, cols) = dense_to_coo(&dense)?;
        assert_eq!(values.dims(), &[0]);
        assert_eq!(rows.dims(), &[0]);
        assert_eq!(cols.dims(), &[0]);
        Ok(())
    }

    #[test]
    fn test_rejects_non_matrix() {
        let vector = Tensor::new(&[1f32, 0., 2.], &Device::Cpu).unwrap();
        assert!(dense_to_coo(&vector).is_err());
    }
}
