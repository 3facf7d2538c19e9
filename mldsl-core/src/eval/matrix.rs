//! Dense row-major matrix arithmetic for the built-in matrix keywords.

pub fn transpose(rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
    if rows.is_empty() {
        return vec![];
    }

    let cols = rows[0].len();

    (0..cols)
        .map(|j| rows.iter().map(|row| row[j]).collect())
        .collect()
}

pub fn add(left: &[Vec<f64>], right: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, String> {
    elementwise(left, right, |a, b| a + b)
}

pub fn subtract(left: &[Vec<f64>], right: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, String> {
    elementwise(left, right, |a, b| a - b)
}

fn elementwise(
    left: &[Vec<f64>],
    right: &[Vec<f64>],
    op: impl Fn(f64, f64) -> f64
) -> Result<Vec<Vec<f64>>, String> {
    if left.len() != right.len()
        || left.first().map(Vec::len) != right.first().map(Vec::len)
    {
        return Err(format!(
            "cannot combine a {}x{} matrix with a {}x{} matrix",
            left.len(),
            left.first().map_or(0, Vec::len),
            right.len(),
            right.first().map_or(0, Vec::len)
        ));
    }

    Ok(left.iter()
        .zip(right)
        .map(|(l, r)| l.iter().zip(r).map(|(a, b)| op(*a, *b)).collect())
        .collect())
}

pub fn multiply(left: &[Vec<f64>], right: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, String> {
    let inner = left.first().map_or(0, Vec::len);

    if inner != right.len() {
        return Err(format!(
            "cannot multiply a {}x{} matrix by a {}x{} matrix",
            left.len(),
            inner,
            right.len(),
            right.first().map_or(0, Vec::len)
        ));
    }

    let cols = right.first().map_or(0, Vec::len);

    Ok(left.iter()
        .map(|row| {
            (0..cols)
                .map(|j| (0..inner).map(|k| row[k] * right[k][j]).sum())
                .collect()
        })
        .collect())
}

/// Gauss-Jordan elimination with partial pivoting.
pub fn inverse(rows: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, String> {
    let n = rows.len();

    if n == 0 || rows[0].len() != n {
        return Err(format!(
            "only square matrices can be inverted, this one is {}x{}",
            n,
            rows.first().map_or(0, Vec::len)
        ));
    }

    // augment with the identity and reduce in place
    let mut work: Vec<Vec<f64>> = rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let mut augmented = row.clone();
            augmented.extend((0..n).map(|j| if i == j { 1.0 } else { 0.0 }));
            augmented
        })
        .collect();

    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&a, &b| {
                work[a][col].abs()
                    .partial_cmp(&work[b][col].abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap_or(col);

        if work[pivot_row][col].abs() < 1e-12 {
            return Err("matrix is singular".into());
        }

        work.swap(col, pivot_row);

        let pivot = work[col][col];
        for value in &mut work[col] {
            *value /= pivot;
        }

        for row in 0..n {
            if row == col {
                continue;
            }

            let scale = work[row][col];
            if scale == 0.0 {
                continue;
            }

            for j in 0..2 * n {
                work[row][j] -= scale * work[col][j];
            }
        }
    }

    Ok(work.into_iter().map(|row| row[n..].to_vec()).collect())
}
