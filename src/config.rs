#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: String,
    pub head_count: usize,
    pub hidden_size: usize,
    pub learning_rate: f64,
    pub train_iterations: u32,
    pub train_target: String,
    pub seed: Option<u64>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        let data_path = std::env::var("DATA_PATH").unwrap_or_else(|_| "data.json".to_string());

        let head_count = std::env::var("HEAD_COUNT")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .unwrap_or(3);

        let hidden_size = std::env::var("HIDDEN_SIZE")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .unwrap_or(100);

        let learning_rate = std::env::var("LEARNING_RATE")
            .ok()
            .and_then(|value| value.parse::<f64>().ok())
            .unwrap_or(0.2);

        let train_iterations = std::env::var("TRAIN_ITERATIONS")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(20);

        let train_target = std::env::var("TRAIN_TARGET").unwrap_or_else(|_| "helped".to_string());

        let seed = std::env::var("SEED")
            .ok()
            .and_then(|value| value.parse::<u64>().ok());

        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            data_path,
            head_count,
            hidden_size,
            learning_rate,
            train_iterations,
            train_target,
            seed,
            log_level,
        }
    }
}
