//! # danci-correct - 单词纠错实验
//!
//! 本 crate 用字符 n-gram 相似度为每个词表词构建对未知输入词的相似度画像，
//! 再用一个小型可训练评分网络把画像映射为词表上的概率分布，取最大概率项
//! 作为纠错结果。
//!
//! ## 模块结构
//!
//! - [`ngram`] - n-gram 生成与 Jaccard 相似度
//! - [`heads`] - 单粒度相似度头与多头特征矩阵
//! - [`matrix`] - 矩阵运算 (行优先存储、softmax、Xavier 初始化)
//! - [`sanitize`] - 数值检查与参数诊断
//! - [`network`] - 前向/反向评分网络
//! - [`vocab`] - 语料加载与词表
//! - [`trainer`] - 训练驱动与纠错入口
//! - [`config`] - 环境变量配置
//! - [`types`] - 公共类型和常量
//!
//! ## 使用示例
//!
//! ```rust
//! use std::sync::Arc;
//! use danci_correct::network::CorrectorNetwork;
//! use danci_correct::trainer;
//! use danci_correct::vocab::Vocabulary;
//!
//! let vocabulary = Arc::new(Vocabulary::from_words(["cat", "cats", "dog"]));
//! let mut network =
//!     CorrectorNetwork::new(2, 16, 0.2, Arc::clone(&vocabulary), Some(42)).unwrap();
//!
//! trainer::train_on_word(&mut network, "cats", 20).unwrap();
//! let pass = network.forward("catz");
//! assert_eq!(pass.output.len(), vocabulary.len());
//! ```

// ============================================================================
// 模块声明
// ============================================================================

pub mod config;
pub mod heads;
pub mod matrix;
pub mod network;
pub mod ngram;
pub mod sanitize;
pub mod trainer;
pub mod types;
pub mod vocab;

// ============================================================================
// 重新导出
// ============================================================================

/// 重新导出公共类型
pub use types::{Correction, ForwardPass, ParamDiagnostics, TrainingReport};

/// 重新导出评分网络
pub use network::{CorrectorNetwork, NetworkError};

/// 重新导出相似度头
pub use heads::{MultiHead, SimilarityHead};

/// 重新导出词表与语料
pub use vocab::{Corpus, CorpusError, CorpusRecord, Vocabulary};

/// 重新导出训练与纠错入口
pub use trainer::{correct_sentence, correct_word, train_on_word};
