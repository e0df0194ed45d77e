use serde::{Deserialize, Serialize};

// 常量定义

/// 哨兵填充字符（不会出现在真实词汇中）
pub const SENTINEL: char = '#';

/// 数值稳定性：最小正数
pub const EPSILON: f64 = 1e-10;

/// 参数绝对值上限，超过视为训练发散
pub const MAX_PARAM_ABS: f64 = 1e6;

/// ForwardPass 结构体 - 一次前向传播的中间结果
///
/// backward 以显式参数形式消费该值，避免把中间张量藏在实例字段里。
#[derive(Debug, Clone, Serialize)]
pub struct ForwardPass {
    /// 特征矩阵 (V×H, 行优先)
    pub features: Vec<f64>,
    /// 投影后矩阵 (V×S, 行优先)
    pub projected: Vec<f64>,
    /// softmax 输出 (V 维概率分布)
    pub output: Vec<f64>,
}

/// TrainingReport 结构体 - 单词训练结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    pub target_index: usize,
    pub iterations: u32,
    pub initial_loss: f64,
    pub final_loss: f64,
    /// 训练结束后目标词的输出概率
    pub target_probability: f64,
}

/// ParamDiagnostics 结构体 - 参数健康诊断结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamDiagnostics {
    pub is_healthy: bool,
    pub has_nan: bool,
    pub has_inf: bool,
    pub max_abs: f64,
    pub message: String,
}

/// 纠错结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Correction {
    /// 词表内的词，原样返回
    Known(String),
    /// 词表外的词，返回概率最高的候选
    Suggestion { word: String, probability: f64 },
}

impl Correction {
    pub fn into_word(self) -> String {
        match self {
            Correction::Known(word) => word,
            Correction::Suggestion { word, .. } => word,
        }
    }
}
