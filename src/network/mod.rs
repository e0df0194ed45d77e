use std::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::heads::MultiHead;
use crate::matrix::{
    mat_mul, mat_vec_mul, outer_product, softmax, transposed_mat_mul, transposed_mat_vec_mul,
    vec_add_scaled, xavier_uniform,
};
use crate::sanitize::{diagnose_params, has_invalid_values};
use crate::types::{ForwardPass, ParamDiagnostics, EPSILON};
use crate::vocab::Vocabulary;

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("invalid network config: {0}")]
    InvalidConfig(String),
    #[error("target word not in vocabulary: {0}")]
    UnknownTarget(String),
}

/// 纠错评分网络
///
/// 前向传播: 特征矩阵 (V×H) → 投影 U (H×S) → 评分 V (S×1) → softmax，
/// 输出词表上的概率分布。反向传播按交叉熵梯度就地更新 U 与 V。
pub struct CorrectorNetwork {
    heads: MultiHead,
    vocabulary: Arc<Vocabulary>,
    head_count: usize,
    hidden_size: usize,
    learning_rate: f64,
    /// 投影矩阵 U (H×S, 行优先)
    u: Vec<f64>,
    /// 评分向量 V (S×1)
    v: Vec<f64>,
}

impl CorrectorNetwork {
    /// 创建网络并用 Xavier 初始化参数
    ///
    /// `seed` 固定时初始化完全可复现（测试用）。
    pub fn new(
        head_count: usize,
        hidden_size: usize,
        learning_rate: f64,
        vocabulary: Arc<Vocabulary>,
        seed: Option<u64>,
    ) -> Result<Self, NetworkError> {
        if head_count == 0 {
            return Err(NetworkError::InvalidConfig(
                "head_count must be >= 1".to_string(),
            ));
        }
        if hidden_size == 0 {
            return Err(NetworkError::InvalidConfig(
                "hidden_size must be >= 1".to_string(),
            ));
        }
        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(NetworkError::InvalidConfig(
                "learning_rate must be a positive finite number".to_string(),
            ));
        }
        if vocabulary.is_empty() {
            return Err(NetworkError::InvalidConfig(
                "vocabulary must not be empty".to_string(),
            ));
        }

        let mut rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let u = xavier_uniform(head_count, hidden_size, &mut rng);
        let v = xavier_uniform(hidden_size, 1, &mut rng);

        Ok(Self {
            heads: MultiHead::new(head_count, Arc::clone(&vocabulary)),
            vocabulary,
            head_count,
            hidden_size,
            learning_rate,
            u,
            v,
        })
    }

    /// 前向传播
    ///
    /// 返回显式的 [`ForwardPass`]，供配对的 backward 调用消费。方法本身
    /// 不修改网络，连续调用互不影响。
    pub fn forward(&self, word: &str) -> ForwardPass {
        let vocab_size = self.vocabulary.len();

        // 特征矩阵 (V×H)
        let features = self.heads.compute(word);
        // 投影 (V×S)
        let projected = mat_mul(&features, &self.u, vocab_size, self.head_count, self.hidden_size);
        // 打分 (V×1) 后过 softmax
        let scores = mat_vec_mul(&projected, &self.v, vocab_size, self.hidden_size);
        let output = softmax(&scores);

        ForwardPass {
            features,
            projected,
            output,
        }
    }

    /// 反向传播：根据误差向量就地更新 U 和 V
    ///
    /// `error` 为 V 维（约定为 softmax 输出减 one-hot 目标）。
    pub fn backward(&mut self, pass: &ForwardPass, error: &[f64]) {
        let vocab_size = self.vocabulary.len();
        debug_assert_eq!(error.len(), vocab_size);
        debug_assert_eq!(pass.features.len(), vocab_size * self.head_count);
        debug_assert_eq!(pass.projected.len(), vocab_size * self.hidden_size);
        debug_assert!(!has_invalid_values(error), "error vector contains NaN/Inf");

        // ∂L/∂V = projectedᵀ · error  (S×1)
        let grad_v = transposed_mat_vec_mul(&pass.projected, error, vocab_size, self.hidden_size);

        // ∂L/∂U = featuresᵀ · (error · Vᵀ)  (H×S)
        let error_v = outer_product(error, &self.v);
        let grad_u = transposed_mat_mul(
            &pass.features,
            &error_v,
            vocab_size,
            self.head_count,
            self.hidden_size,
        );

        vec_add_scaled(&mut self.u, &grad_u, -self.learning_rate);
        vec_add_scaled(&mut self.v, &grad_v, -self.learning_rate);
    }

    /// 交叉熵梯度捷径: error = output − one_hot(target)
    pub fn cross_entropy_error(output: &[f64], target: usize) -> Vec<f64> {
        debug_assert!(target < output.len());
        let mut error = output.to_vec();
        error[target] -= 1.0;
        error
    }

    /// 交叉熵损失: −ln(output[target])
    pub fn cross_entropy_loss(output: &[f64], target: usize) -> f64 {
        debug_assert!(target < output.len());
        -output[target].max(EPSILON).ln()
    }

    /// 参数健康诊断
    pub fn diagnose(&self) -> ParamDiagnostics {
        diagnose_params(&self.u, &self.v)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn head_count(&self) -> usize {
        self.head_count
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// 投影矩阵 U (H×S, 行优先)
    pub fn projection(&self) -> &[f64] {
        &self.u
    }

    /// 评分向量 V (S×1)
    pub fn scoring(&self) -> &[f64] {
        &self.v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_vocabulary() -> Arc<Vocabulary> {
        Arc::new(Vocabulary::from_words(["cat", "cats", "dog"]))
    }

    fn test_network() -> CorrectorNetwork {
        CorrectorNetwork::new(2, 8, 0.2, test_vocabulary(), Some(42)).unwrap()
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let vocab = test_vocabulary();
        assert!(matches!(
            CorrectorNetwork::new(0, 8, 0.2, Arc::clone(&vocab), None),
            Err(NetworkError::InvalidConfig(_))
        ));
        assert!(matches!(
            CorrectorNetwork::new(2, 0, 0.2, Arc::clone(&vocab), None),
            Err(NetworkError::InvalidConfig(_))
        ));
        assert!(matches!(
            CorrectorNetwork::new(2, 8, 0.0, Arc::clone(&vocab), None),
            Err(NetworkError::InvalidConfig(_))
        ));
        assert!(matches!(
            CorrectorNetwork::new(2, 8, f64::NAN, Arc::clone(&vocab), None),
            Err(NetworkError::InvalidConfig(_))
        ));

        let empty = Arc::new(Vocabulary::from_words(Vec::<String>::new()));
        assert!(matches!(
            CorrectorNetwork::new(2, 8, 0.2, empty, None),
            Err(NetworkError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_seeded_init_is_deterministic() {
        let a = CorrectorNetwork::new(2, 8, 0.2, test_vocabulary(), Some(7)).unwrap();
        let b = CorrectorNetwork::new(2, 8, 0.2, test_vocabulary(), Some(7)).unwrap();
        assert_eq!(a.projection(), b.projection());
        assert_eq!(a.scoring(), b.scoring());
    }

    #[test]
    fn test_forward_output_is_a_distribution() {
        let network = test_network();
        // word absent from the vocabulary
        let pass = network.forward("catz");

        assert_eq!(pass.output.len(), 3);
        let sum: f64 = pass.output.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(pass.output.iter().all(|p| (0.0..=1.0).contains(p)));
    }

    #[test]
    fn test_forward_shapes() {
        let network = test_network();
        let pass = network.forward("cats");
        assert_eq!(pass.features.len(), 3 * 2);
        assert_eq!(pass.projected.len(), 3 * 8);
        assert_eq!(pass.output.len(), 3);
    }

    #[test]
    fn test_backward_updates_parameters() {
        let mut network = test_network();
        let u_before = network.projection().to_vec();
        let v_before = network.scoring().to_vec();

        let pass = network.forward("cats");
        let error = CorrectorNetwork::cross_entropy_error(&pass.output, 1);
        network.backward(&pass, &error);

        assert!(network.projection() != u_before.as_slice());
        assert!(network.scoring() != v_before.as_slice());
    }

    #[test]
    fn test_consecutive_forwards_then_backward_uses_given_pass() {
        // Two networks with identical seeds; one performs an extra forward
        // before backward. The update must depend only on the pass handed
        // to backward, so both end with identical parameters.
        let mut a = CorrectorNetwork::new(2, 8, 0.2, test_vocabulary(), Some(9)).unwrap();
        let mut b = CorrectorNetwork::new(2, 8, 0.2, test_vocabulary(), Some(9)).unwrap();

        let _discarded = a.forward("dog");
        let pass_a = a.forward("cats");
        let error_a = CorrectorNetwork::cross_entropy_error(&pass_a.output, 1);
        a.backward(&pass_a, &error_a);

        let pass_b = b.forward("cats");
        let error_b = CorrectorNetwork::cross_entropy_error(&pass_b.output, 1);
        b.backward(&pass_b, &error_b);

        assert_eq!(a.projection(), b.projection());
        assert_eq!(a.scoring(), b.scoring());
    }

    #[test]
    fn test_cross_entropy_error_shape() {
        let output = vec![0.2, 0.5, 0.3];
        let error = CorrectorNetwork::cross_entropy_error(&output, 1);
        assert_eq!(error, vec![0.2, -0.5, 0.3]);
    }

    #[test]
    fn test_diagnose_fresh_network_is_healthy() {
        let network = test_network();
        assert!(network.diagnose().is_healthy);
    }
}
