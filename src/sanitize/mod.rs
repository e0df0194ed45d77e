use crate::types::{ParamDiagnostics, MAX_PARAM_ABS};

/// 检查数组是否包含无效值 (NaN 或 Inf)
pub fn has_invalid_values(arr: &[f64]) -> bool {
    arr.iter().any(|&x| x.is_nan() || x.is_infinite())
}

/// 诊断网络参数健康状态
///
/// 检查投影矩阵 U 与评分向量 V 是否出现 NaN/Inf，以及幅值是否发散。
pub fn diagnose_params(u: &[f64], v: &[f64]) -> ParamDiagnostics {
    let mut has_nan = false;
    let mut has_inf = false;
    let mut max_abs: f64 = 0.0;

    for &val in u.iter().chain(v.iter()) {
        if val.is_nan() {
            has_nan = true;
        } else if val.is_infinite() {
            has_inf = true;
        } else {
            max_abs = max_abs.max(val.abs());
        }
    }

    let is_healthy = !has_nan && !has_inf && max_abs < MAX_PARAM_ABS;

    let message = if has_nan {
        "parameters contain NaN values".to_string()
    } else if has_inf {
        "parameters contain infinite values".to_string()
    } else if !is_healthy {
        format!("parameter magnitude too large: {:.2e}", max_abs)
    } else {
        "parameters are healthy".to_string()
    };

    ParamDiagnostics {
        is_healthy,
        has_nan,
        has_inf,
        max_abs,
        message,
    }
}
