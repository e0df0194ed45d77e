use rand::Rng;

/// 矩阵乘法 C = A·B (行优先存储, A: n×k, B: k×m, C: n×m)
pub fn mat_mul(a: &[f64], b: &[f64], n: usize, k: usize, m: usize) -> Vec<f64> {
    debug_assert_eq!(a.len(), n * k);
    debug_assert_eq!(b.len(), k * m);
    let mut c = vec![0.0; n * m];

    for i in 0..n {
        for l in 0..k {
            let a_il = a[i * k + l];
            for j in 0..m {
                c[i * m + j] += a_il * b[l * m + j];
            }
        }
    }

    c
}

/// 矩阵向量乘法 y = A·x (A: n×m, x: m, y: n)
pub fn mat_vec_mul(a: &[f64], x: &[f64], n: usize, m: usize) -> Vec<f64> {
    debug_assert_eq!(a.len(), n * m);
    debug_assert_eq!(x.len(), m);
    let mut y = vec![0.0; n];

    for i in 0..n {
        for j in 0..m {
            y[i] += a[i * m + j] * x[j];
        }
    }

    y
}

/// 转置矩阵乘法 C = Aᵀ·B (A: n×k, B: n×m, C: k×m)
pub fn transposed_mat_mul(a: &[f64], b: &[f64], n: usize, k: usize, m: usize) -> Vec<f64> {
    debug_assert_eq!(a.len(), n * k);
    debug_assert_eq!(b.len(), n * m);
    let mut c = vec![0.0; k * m];

    for i in 0..n {
        for j in 0..k {
            let a_ij = a[i * k + j];
            for l in 0..m {
                c[j * m + l] += a_ij * b[i * m + l];
            }
        }
    }

    c
}

/// 转置矩阵向量乘法 y = Aᵀ·x (A: n×m, x: n, y: m)
pub fn transposed_mat_vec_mul(a: &[f64], x: &[f64], n: usize, m: usize) -> Vec<f64> {
    debug_assert_eq!(a.len(), n * m);
    debug_assert_eq!(x.len(), n);
    let mut y = vec![0.0; m];

    for i in 0..n {
        for j in 0..m {
            y[j] += a[i * m + j] * x[i];
        }
    }

    y
}

/// 外积 C = x·yᵀ (x: n, y: m, C: n×m)
pub fn outer_product(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let m = y.len();
    let mut c = vec![0.0; n * m];

    for i in 0..n {
        for j in 0..m {
            c[i * m + j] = x[i] * y[j];
        }
    }

    c
}

/// 向量加法: a += scale * b
pub fn vec_add_scaled(a: &mut [f64], b: &[f64], scale: f64) {
    for (ai, &bi) in a.iter_mut().zip(b.iter()) {
        *ai += scale * bi;
    }
}

/// softmax 函数（减去最大值保证数值稳定）
pub fn softmax(x: &[f64]) -> Vec<f64> {
    debug_assert!(!x.is_empty());
    let max = x.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = x.iter().map(|&v| (v - max).exp()).collect();
    let sum: f64 = exps.iter().sum();

    exps.into_iter().map(|e| e / sum).collect()
}

/// 最大元素下标
pub fn argmax(x: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in x.iter().enumerate() {
        if v > x[best] {
            best = i;
        }
    }
    best
}

/// Xavier 初始化: uniform(-1,1) * √(6/(fan_in+fan_out))
pub fn xavier_uniform<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Vec<f64> {
    let scale = (6.0 / (rows + cols) as f64).sqrt();
    (0..rows * cols)
        .map(|_| rng.gen_range(-1.0..1.0) * scale)
        .collect()
}
