use tracing::debug;

use crate::matrix::argmax;
use crate::network::{CorrectorNetwork, NetworkError};
use crate::types::{Correction, TrainingReport};

/// Training progress is logged every this many steps.
const LOG_STRIDE: u32 = 5;

/// Repeatedly run forward/backward on a single target word.
///
/// The target must be a vocabulary member; training an unknown word is a
/// setup error and fails before any parameter is touched. Reported losses
/// are cross-entropy against the target's one-hot distribution; the final
/// numbers are measured after the last update.
pub fn train_on_word(
    network: &mut CorrectorNetwork,
    target: &str,
    iterations: u32,
) -> Result<TrainingReport, NetworkError> {
    let target_index = network
        .vocabulary()
        .index_of(target)
        .ok_or_else(|| NetworkError::UnknownTarget(target.to_string()))?;

    let mut pass = network.forward(target);
    let initial_loss = CorrectorNetwork::cross_entropy_loss(&pass.output, target_index);

    for step in 1..=iterations {
        let error = CorrectorNetwork::cross_entropy_error(&pass.output, target_index);
        network.backward(&pass, &error);
        pass = network.forward(target);

        if step % LOG_STRIDE == 0 || step == iterations {
            let loss = CorrectorNetwork::cross_entropy_loss(&pass.output, target_index);
            debug!(step, loss, target, "training step");
        }
    }

    let final_loss = CorrectorNetwork::cross_entropy_loss(&pass.output, target_index);

    Ok(TrainingReport {
        target_index,
        iterations,
        initial_loss,
        final_loss,
        target_probability: pass.output[target_index],
    })
}

/// Correct a single token.
///
/// Vocabulary members are echoed unchanged without touching the network;
/// anything else is scored and mapped to the highest-probability entry.
pub fn correct_word(network: &CorrectorNetwork, word: &str) -> Correction {
    if network.vocabulary().contains(word) {
        return Correction::Known(word.to_string());
    }

    let pass = network.forward(word);
    let best = argmax(&pass.output);
    let suggestion = network
        .vocabulary()
        .word_at(best)
        .unwrap_or_default()
        .to_string();

    Correction::Suggestion {
        word: suggestion,
        probability: pass.output[best],
    }
}

/// Correct every token of a sentence, preserving single-space separation.
///
/// Tokens are produced by splitting on single spaces; empty tokens (from
/// consecutive spaces) pass through untouched.
pub fn correct_sentence(network: &CorrectorNetwork, sentence: &str) -> String {
    sentence
        .split(' ')
        .map(|token| {
            if token.is_empty() {
                return String::new();
            }
            correct_word(network, token).into_word()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::Vocabulary;
    use std::sync::Arc;

    fn test_network() -> CorrectorNetwork {
        let vocab = Arc::new(Vocabulary::from_words(["cat", "cats", "dog"]));
        CorrectorNetwork::new(2, 8, 0.2, vocab, Some(42)).unwrap()
    }

    #[test]
    fn test_train_rejects_unknown_target() {
        let mut network = test_network();
        let result = train_on_word(&mut network, "bird", 5);
        assert!(matches!(result, Err(NetworkError::UnknownTarget(_))));
    }

    #[test]
    fn test_training_reduces_loss() {
        let mut network = test_network();
        let report = train_on_word(&mut network, "cats", 50).unwrap();

        assert_eq!(report.iterations, 50);
        assert_eq!(report.target_index, 1);
        assert!(report.final_loss < report.initial_loss);
        assert!(report.target_probability > 0.0);
    }

    #[test]
    fn test_zero_iterations_leaves_parameters_untouched() {
        let mut network = test_network();
        let u_before = network.projection().to_vec();
        let report = train_on_word(&mut network, "cats", 0).unwrap();

        assert_eq!(report.initial_loss, report.final_loss);
        assert_eq!(network.projection(), u_before.as_slice());
    }

    #[test]
    fn test_known_word_is_echoed() {
        let network = test_network();
        assert_eq!(
            correct_word(&network, "cat"),
            Correction::Known("cat".to_string())
        );
    }

    #[test]
    fn test_unknown_word_gets_a_suggestion() {
        let network = test_network();
        match correct_word(&network, "Cat") {
            // membership is exact, so "Cat" goes through the network
            Correction::Suggestion { word, probability } => {
                assert!(network.vocabulary().contains(&word));
                assert!((0.0..=1.0).contains(&probability));
            }
            other => panic!("expected a suggestion, got {other:?}"),
        }
    }

    #[test]
    fn test_correct_sentence_preserves_known_tokens() {
        let mut network = test_network();
        train_on_word(&mut network, "cats", 100).unwrap();

        let corrected = correct_sentence(&network, "dog cats");
        assert_eq!(corrected, "dog cats");
    }

    #[test]
    fn test_correct_sentence_preserves_empty_tokens() {
        let network = test_network();
        assert_eq!(correct_sentence(&network, "cat  dog"), "cat  dog");
    }
}
