use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use danci_correct::config::Config;
use danci_correct::network::CorrectorNetwork;
use danci_correct::trainer;
use danci_correct::vocab::{Corpus, Vocabulary};

fn main() {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let corpus = match Corpus::from_file(&config.data_path) {
        Ok(corpus) => corpus,
        Err(err) => {
            tracing::error!(error = %err, path = %config.data_path, "failed to load corpus");
            std::process::exit(1);
        }
    };

    let vocabulary = match Vocabulary::from_corpus(&corpus) {
        Ok(vocabulary) => Arc::new(vocabulary),
        Err(err) => {
            tracing::error!(error = %err, "failed to build vocabulary");
            std::process::exit(1);
        }
    };
    tracing::info!(words = vocabulary.len(), "vocabulary built");

    let mut network = match CorrectorNetwork::new(
        config.head_count,
        config.hidden_size,
        config.learning_rate,
        Arc::clone(&vocabulary),
        config.seed,
    ) {
        Ok(network) => network,
        Err(err) => {
            tracing::error!(error = %err, "failed to construct network");
            std::process::exit(1);
        }
    };

    match trainer::train_on_word(&mut network, &config.train_target, config.train_iterations) {
        Ok(report) => {
            tracing::info!(
                target = %config.train_target,
                iterations = report.iterations,
                initial_loss = report.initial_loss,
                final_loss = report.final_loss,
                target_probability = report.target_probability,
                "training complete"
            );
        }
        Err(err) => {
            tracing::error!(error = %err, target = %config.train_target, "training failed");
            std::process::exit(1);
        }
    }

    let diagnostics = network.diagnose();
    if !diagnostics.is_healthy {
        tracing::warn!(message = %diagnostics.message, "network parameters unhealthy after training");
    }

    println!("Enter a sentence; unknown words are corrected. Type 'quit' or 'exit' to stop.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        if stdout.flush().is_err() {
            break;
        }

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(err) => {
                tracing::error!(error = %err, "failed to read input");
                break;
            }
        }

        let sentence = input.trim_end_matches(|c| c == '\r' || c == '\n');
        if sentence.is_empty() {
            continue;
        }
        if sentence == "quit" || sentence == "exit" {
            break;
        }

        println!("{}", trainer::correct_sentence(&network, sentence));
    }
}
